//! Click and Tick
//!
//! This example drives one column the way a host event loop would.
//!
//! Key concepts:
//! - Clicks move a group's blank and classify the change
//! - Events go to any closure registered as a sink
//! - Ticks animate beads toward the rows the digit implies
//! - A manual clock keeps the wobble deterministic
//!
//! Run with: cargo run --example click_and_tick

use beadboost::builder::ColumnBuilder;
use beadboost::controller::ColumnEvent;
use beadboost::core::BeadGroup;
use beadboost::motion::ManualClock;

fn main() {
    println!("=== Click and Tick Example ===\n");

    let clock = ManualClock::new(0.0);
    let mut column = ColumnBuilder::new()
        .initial_value(3)
        .target(8)
        .clock(clock.clone())
        .sink(|event: &ColumnEvent| println!("  event: {event:?}"))
        .build()
        .unwrap();

    println!("Initial value: {}", column.current_value());

    println!("\nClick upper row 0 (seat the five bead):");
    column.on_user_select(BeadGroup::Upper, 0).unwrap();

    for frame_number in 0..12 {
        clock.advance(16.0);
        let frame = column.tick();
        let upper = frame.group(BeadGroup::Upper).next().unwrap();
        println!(
            "  frame {frame_number:2}: upper bead at {:6.2} (resting: {})",
            upper.position, upper.resting
        );
    }

    println!("\nClick lower row 0 (release the lower stack):");
    column.on_user_select(BeadGroup::Lower, 0).unwrap();

    while !column.is_settled(1e-3) {
        clock.advance(16.0);
        column.tick();
    }
    println!("Settled at value {}", column.current_value());
    println!("Value path: {:?}", column.history().get_path());

    println!("\n=== Example Complete ===");
}
