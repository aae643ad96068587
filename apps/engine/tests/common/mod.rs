#![allow(dead_code)]

// tests/common/mod.rs
use engine::{Player, PlayerKind, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub fn four_players() -> Vec<Player> {
    engine_test_support::unique_helpers::unique_names("player", 4)
        .into_iter()
        .enumerate()
        .map(|(seat, name)| {
            let kind = if seat == 0 {
                PlayerKind::Human
            } else {
                PlayerKind::Computer
            };
            Player::new(format!("session-{seat}"), name, kind)
        })
        .collect()
}

pub fn seated_table(rounds: u16) -> Table {
    let name = engine_test_support::unique_helpers::unique_str("table");
    Table::with_players(name, rounds, four_players()).expect("four players seat cleanly")
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
