use proptest::prelude::*;

use crate::domain::cards_logic::{trick_suit, TrickSuit};
use crate::domain::tricks::{eligible_cards, resolve_trick, Play};
use crate::domain::{test_gens, test_prelude, Card};

/// Independent ranking: trumps by the fixed list, then the led suit by value.
fn oracle_key(card: Card, lead: TrickSuit) -> u16 {
    const TRUMPS: [&str; 6] = ["JD", "QD", "KD", "TD", "AD", "QC"];
    let token = card.to_string();
    if let Some(pos) = TRUMPS.iter().position(|t| *t == token) {
        return 100 + pos as u16;
    }
    if trick_suit(card) == lead {
        u16::from(card.value())
    } else {
        0
    }
}

fn oracle_winner(plays: &[Play]) -> usize {
    let lead = trick_suit(plays[0].card);
    let mut best = 0;
    for (i, play) in plays.iter().enumerate().skip(1) {
        if oracle_key(play.card, lead) > oracle_key(plays[best].card, lead) {
            best = i;
        }
    }
    best
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The resolved winner matches the oracle, and it holds a trump or the led suit.
    #[test]
    fn prop_trick_winner_matches_oracle(plays in test_gens::complete_trick()) {
        let winner = resolve_trick(&plays).unwrap();
        let expected = plays[oracle_winner(&plays)];
        prop_assert_eq!(winner, expected, "plays={:?}", plays);

        let lead = trick_suit(plays[0].card);
        prop_assert!(winner.card.is_trump() || trick_suit(winner.card) == lead);
    }

    /// Adding a trump to a trick that had none makes a trump the winner.
    #[test]
    fn prop_any_trump_beats_plain_cards(plays in test_gens::complete_trick()) {
        let has_trump = plays.iter().any(|p| p.card.is_trump());
        let winner = resolve_trick(&plays).unwrap();
        prop_assert_eq!(winner.card.is_trump(), has_trump);
    }

    /// Eligible cards are a non-empty subset of the hand, all following when possible.
    #[test]
    fn prop_eligibility_follows_lead(
        hand in prop::collection::vec(test_gens::card(), 1..10),
        lead in test_gens::card(),
    ) {
        let plays = [Play { player: uuid::Uuid::nil(), card: lead }];
        let eligible = eligible_cards(&hand, &plays);
        prop_assert!(!eligible.is_empty());
        prop_assert!(eligible.iter().all(|c| hand.contains(c)));

        let led = trick_suit(lead);
        if hand.iter().any(|c| trick_suit(*c) == led) {
            prop_assert!(eligible.iter().all(|c| trick_suit(*c) == led));
        } else {
            prop_assert_eq!(eligible, hand);
        }
    }
}
