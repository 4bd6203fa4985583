//! Abacus Total
//!
//! This example builds a three-column abacus from JSON configuration.
//!
//! Key concepts:
//! - Column configuration is plain serde data with defaults
//! - Invalid configuration reports every problem at once
//! - Columns are independent; the abacus reads them positionally
//!
//! Run with: cargo run --example abacus_total

use beadboost::config::ColumnConfig;
use beadboost::controller::Abacus;
use beadboost::core::BeadGroup;
use beadboost::ColumnController;

fn main() {
    println!("=== Abacus Total Example ===\n");

    let config = ColumnConfig::from_json(r#"{ "width": 100, "frame_rate": 30 }"#).unwrap();
    let mut abacus = Abacus::new(vec![config; 3]).unwrap();

    let clicks = [
        (0, BeadGroup::Lower, 2),
        (1, BeadGroup::Upper, 0),
        (1, BeadGroup::Lower, 1),
        (2, BeadGroup::Lower, 4),
    ];
    for (index, group, row) in clicks {
        let column = abacus.column_mut(index).unwrap();
        column.on_user_select(group, row).unwrap();
        println!("Column {index}: {group} row {row} -> {}", column.current_value());
    }

    println!("\nDigits: {:?}", abacus.values());
    println!("Total: {:?}", abacus.total());

    abacus.reset();
    println!("After reset: {:?}", abacus.total());

    println!("\nRejecting a broken configuration:");
    let broken = ColumnConfig::from_json(r#"{ "width": 0, "frame_rate": -1 }"#).unwrap();
    match ColumnController::new(&broken) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  {err}"),
    }

    println!("\n=== Example Complete ===");
}
