use crate::{CardHolder, Deck, GameError, Pack, Player, CARDS_PER_PLAYER};
use std::sync::Arc;

/// Ring slots per player: the player itself plus the deck after it.
pub const SLOTS_PER_PLAYER: usize = 2;

/// The cyclic arrangement `[P1, D1, P2, D2, ..., PN, DN]`. Slots are
/// addressed by index, neighbors by index arithmetic: player k draws from
/// the deck before it (deck N for player 1) and discards to the deck
/// after it (deck k). Neighbor references are wired once here and never
/// reassigned.
#[derive(Debug)]
pub struct GameRing {
    players: Vec<Player>,
    decks: Vec<Arc<Deck>>,
}

impl GameRing {
    pub fn build(num_players: u32) -> Result<Self, GameError> {
        if num_players == 0 {
            return Err(GameError::InvalidPlayerCount(0));
        }
        let n = num_players as usize;
        let decks: Vec<Arc<Deck>> = (1..=num_players).map(|id| Arc::new(Deck::new(id))).collect();
        let players = (1..=n)
            .map(|seat| {
                let draw = Arc::clone(&decks[(seat + n - 2) % n]);
                let discard = Arc::clone(&decks[seat - 1]);
                Player::new(seat as u32, draw, discard)
            })
            .collect();
        Ok(Self { players, decks })
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn slot_count(&self) -> usize {
        self.players.len() * SLOTS_PER_PLAYER
    }

    /// Purely positional round-robin: deal index i lands on ring slot
    /// `i mod 2N`, so each slot collects exactly four cards in draw
    /// order. Any denomination clustering comes from the pack contents.
    pub fn deal(&mut self, pack: Pack) {
        debug_assert_eq!(pack.len(), self.players.len() * CARDS_PER_PLAYER);
        let slots = self.slot_count();
        for (index, card) in pack.into_cards().into_iter().enumerate() {
            let slot = index % slots;
            if slot % 2 == 0 {
                self.players[slot / 2].add_card(card);
            } else {
                self.decks[slot / 2].add(card);
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn decks(&self) -> &[Arc<Deck>] {
        &self.decks
    }

    pub fn into_parts(self) -> (Vec<Player>, Vec<Arc<Deck>>) {
        (self.players, self.decks)
    }
}
