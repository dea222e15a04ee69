use serde::{Deserialize, Serialize};
use std::fmt;

/// A card carries nothing but its denomination. Two cards are
/// interchangeable whenever their denominations match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub denomination: u32,
}

impl Card {
    pub fn new(denomination: u32) -> Self {
        Self { denomination }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.denomination)
    }
}

/// Anything on the ring that holds an ordered run of cards: a player's
/// hand or a deck's queue. Dealing and reporting go through this.
pub trait CardHolder {
    fn cards(&self) -> Vec<Card>;
    fn add_card(&mut self, card: Card);

    fn same_cards(&self, other: &dyn CardHolder) -> bool {
        self.cards() == other.cards()
    }
}
