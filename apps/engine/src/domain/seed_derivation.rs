//! Seed derivation for reproducible simulations.
//!
//! A single base seed fans out into per-table, per-round and per-seat seeds
//! so any one round can be replayed without replaying the rounds before it.

/// Seed for one table of a run.
pub fn derive_table_seed(base_seed: u64, table_no: u32) -> u64 {
    base_seed
        .wrapping_add((table_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(1)
}

/// Seed for dealing one round at a table.
pub fn derive_round_seed(table_seed: u64, round_no: u16) -> u64 {
    table_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_007))
        .wrapping_add(2)
}

/// Seed for a randomized strategy sitting at `seat`.
pub fn derive_strategy_seed(table_seed: u64, seat: usize) -> u64 {
    table_seed
        .wrapping_add((seat as u64).wrapping_mul(101))
        .wrapping_add(3)
}
