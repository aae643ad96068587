//! Serialization and deserialization for card types.
//!
//! Suits and ranks travel as lowercase names. A card travels as a record
//! `{suit, rank, value, is_trump}`; on input `value` and `is_trump` are
//! optional but, when present, must agree with suit and rank.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[derive(Serialize)]
struct CardRecordOut {
    suit: Suit,
    rank: Rank,
    value: u8,
    is_trump: bool,
}

#[derive(Deserialize)]
struct CardRecordIn {
    suit: Suit,
    rank: Rank,
    #[serde(default)]
    value: Option<u8>,
    #[serde(default)]
    is_trump: Option<bool>,
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardRecordOut {
            suit: self.suit,
            rank: self.rank,
            value: self.value(),
            is_trump: self.is_trump(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = CardRecordIn::deserialize(deserializer)?;
        let card = Card::new(record.suit, record.rank);
        if record.value.is_some_and(|v| v != card.value()) {
            return Err(D::Error::custom(format!(
                "value {:?} does not match {card}",
                record.value
            )));
        }
        if record.is_trump.is_some_and(|t| t != card.is_trump()) {
            return Err(D::Error::custom(format!(
                "is_trump {:?} does not match {card}",
                record.is_trump
            )));
        }
        Ok(card)
    }
}

/// Card lists as compact tokens (`["QC", "TD"]`), for `#[serde(with)]`.
pub mod token_list {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::Card;

    pub fn serialize<S>(cards: &[Card], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(cards.iter().map(|c| c.to_string()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|t| t.parse().map_err(D::Error::custom))
            .collect()
    }
}

/// Hands keyed by player, each as a token list.
pub mod token_hands {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::{Card, PlayerId};

    pub fn serialize<S>(hands: &BTreeMap<PlayerId, Vec<Card>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(hands.iter().map(|(player, cards)| {
            (
                player,
                cards.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            )
        }))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<PlayerId, Vec<Card>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<PlayerId, Vec<String>>::deserialize(deserializer)?
            .into_iter()
            .map(|(player, tokens)| {
                let cards = tokens
                    .iter()
                    .map(|t| t.parse().map_err(D::Error::custom))
                    .collect::<Result<Vec<Card>, _>>()?;
                Ok((player, cards))
            })
            .collect()
    }
}
