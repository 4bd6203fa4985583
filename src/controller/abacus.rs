//! A row of independent columns.

use super::column::ColumnController;
use crate::builder::BuildError;
use crate::config::ColumnConfig;
use crate::motion::ColumnFrame;

/// Columns ordered most significant first.
///
/// Columns share nothing; the abacus only reads their values and fans out
/// ticks and resets.
///
/// # Example
///
/// ```rust
/// use beadboost::config::ColumnConfig;
/// use beadboost::controller::Abacus;
/// use beadboost::core::BeadGroup;
///
/// let mut abacus = Abacus::new(vec![ColumnConfig::default(); 3]).unwrap();
/// abacus.column_mut(0).unwrap().on_user_select(BeadGroup::Lower, 1).unwrap();
/// abacus.column_mut(2).unwrap().on_user_select(BeadGroup::Upper, 0).unwrap();
///
/// assert_eq!(abacus.total(), Some(105));
/// ```
#[derive(Debug)]
pub struct Abacus {
    columns: Vec<ColumnController>,
}

impl Abacus {
    /// Build one column per config.
    pub fn new(configs: impl IntoIterator<Item = ColumnConfig>) -> Result<Self, BuildError> {
        let columns = configs
            .into_iter()
            .map(|config| ColumnController::new(&config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns })
    }

    /// Wrap columns that were built separately.
    pub fn from_columns(columns: Vec<ColumnController>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, index: usize) -> Option<&ColumnController> {
        self.columns.get(index)
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut ColumnController> {
        self.columns.get_mut(index)
    }

    pub fn columns(&self) -> &[ColumnController] {
        &self.columns
    }

    /// Digits, most significant first.
    pub fn values(&self) -> Vec<u8> {
        self.columns
            .iter()
            .map(ColumnController::current_value)
            .collect()
    }

    /// Positional value of all columns.
    ///
    /// Returns `None` when the number does not fit in a `u64`, which takes
    /// twenty or more columns.
    pub fn total(&self) -> Option<u64> {
        self.columns.iter().try_fold(0u64, |total, column| {
            total
                .checked_mul(10)?
                .checked_add(u64::from(column.current_value()))
        })
    }

    /// Set every column back to zero.
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.reset_to_zero();
        }
        tracing::debug!(columns = self.columns.len(), "abacus reset");
    }

    /// Advance every column by one frame.
    pub fn tick_all(&mut self) -> Vec<ColumnFrame> {
        self.columns.iter_mut().map(ColumnController::tick).collect()
    }
}
