//! Orchestration: drive rounds with player strategies and advance tables.

pub mod round_driver;
pub mod round_lifecycle;

pub use round_driver::drive_round;
pub use round_lifecycle::{advance_table, advance_table_with, play_all_rounds, play_all_rounds_with};
