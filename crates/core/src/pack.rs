use crate::Card;
use std::io::BufRead;
use thiserror::Error;

/// Every player accounts for eight cards: four in its hand and four in
/// the deck that follows it on the ring.
pub const CARDS_PER_PLAYER: usize = 8;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("pack source could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line} is not a positive integer denomination")]
    InvalidDenomination { line: usize },
    #[error("pack holds {actual} cards, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
}

/// Reads one denomination per line, in source order. Zero is rejected
/// along with anything non-numeric.
pub fn parse_pack<R: BufRead>(reader: R) -> Result<Vec<Card>, PackError> {
    let mut cards = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let denomination = line
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or(PackError::InvalidDenomination { line: index + 1 })?;
        cards.push(Card::new(denomination));
    }
    Ok(cards)
}

/// A validated pack: exactly `8 * num_players` cards, kept in source
/// order because dealing is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    cards: Vec<Card>,
}

impl Pack {
    pub fn from_cards(cards: Vec<Card>, num_players: u32) -> Result<Self, PackError> {
        let expected = CARDS_PER_PLAYER * num_players as usize;
        if cards.len() != expected {
            return Err(PackError::WrongLength {
                expected,
                actual: cards.len(),
            });
        }
        Ok(Self { cards })
    }

    pub fn from_reader<R: BufRead>(reader: R, num_players: u32) -> Result<Self, PackError> {
        Self::from_cards(parse_pack(reader)?, num_players)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
