//! Fixed game constants.

/// The modeled game is always played by exactly four players.
pub const PLAYERS: usize = 4;
/// 5 ranks x 4 suits x 2 copies.
pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = DECK_SIZE / PLAYERS;
pub const TRICKS_PER_ROUND: usize = HAND_SIZE;
/// Sum of all card values in the deck.
pub const TOTAL_CARD_POINTS: u16 = 240;
/// Re needs strictly more than this to win without announcements.
pub const HALF_CARD_POINTS: u16 = TOTAL_CARD_POINTS / 2;

/// Cards passed in each direction during a poverty exchange.
pub const POVERTY_EXCHANGE_CARDS: usize = 3;
/// A hand may declare poverty only with at most this many trumps.
pub const POVERTY_MAX_TRUMPS: usize = 3;
