use crate::{Card, CardHolder, Deck, GameError};
use std::sync::Arc;

pub const HAND_SIZE: usize = 4;

/// A player sits between two decks fixed at construction: it always draws
/// from `draw_deck` and discards to `discard_deck`. The hand holds exactly
/// four cards at every point outside `make_move`.
#[derive(Debug)]
pub struct Player {
    id: u32,
    hand: Vec<Card>,
    draw_deck: Arc<Deck>,
    discard_deck: Arc<Deck>,
}

/// What a single move did, for narration and the win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub drawn: Card,
    pub discarded: Card,
    pub won: bool,
}

impl Player {
    pub fn new(id: u32, draw_deck: Arc<Deck>, discard_deck: Arc<Deck>) -> Self {
        Self {
            id,
            hand: Vec::with_capacity(HAND_SIZE + 1),
            draw_deck,
            discard_deck,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn draw_deck(&self) -> &Arc<Deck> {
        &self.draw_deck
    }

    pub fn discard_deck(&self) -> &Arc<Deck> {
        &self.discard_deck
    }

    /// Four cards of one denomination, whatever that denomination is.
    pub fn has_won(&self) -> bool {
        self.hand.len() == HAND_SIZE
            && self
                .hand
                .iter()
                .all(|card| card.denomination == self.hand[0].denomination)
    }

    /// One full turn: draw from the left deck, pick a discard, push it to
    /// the right deck. The five-card hand in the middle is never visible
    /// outside this call. Discard policy: the first card left to right
    /// whose denomination differs from this player's id; when the whole
    /// hand matches the id, the freshly drawn card goes straight back out.
    pub fn make_move(&mut self) -> Result<MoveOutcome, GameError> {
        let drawn = self
            .draw_deck
            .draw()
            .ok_or(GameError::EmptyDraw(self.draw_deck.id()))?;
        self.hand.push(drawn);
        let discard_at = self
            .hand
            .iter()
            .position(|card| card.denomination != self.id)
            .unwrap_or(self.hand.len() - 1);
        let discarded = self.hand.remove(discard_at);
        self.discard_deck.add(discarded);
        Ok(MoveOutcome {
            drawn,
            discarded,
            won: self.has_won(),
        })
    }
}

impl CardHolder for Player {
    fn cards(&self) -> Vec<Card> {
        self.hand.clone()
    }

    fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(id: u32, values: &[u32]) -> Arc<Deck> {
        let deck = Arc::new(Deck::new(id));
        for value in values {
            deck.add(Card::new(*value));
        }
        deck
    }

    fn player_with_hand(id: u32, hand: &[u32], left: &Arc<Deck>, right: &Arc<Deck>) -> Player {
        let mut player = Player::new(id, Arc::clone(left), Arc::clone(right));
        for value in hand {
            player.add_card(Card::new(*value));
        }
        player
    }

    #[test]
    fn discards_first_card_differing_from_own_id() {
        // Player 2 between a deck of four 1s and a deck of four 3s, dealt
        // one 3 and three 1s: the 3 goes, the drawn 1 completes the hand.
        let left = deck_of(1, &[1, 1, 1, 1]);
        let right = deck_of(2, &[3, 3, 3, 3]);
        let mut player = player_with_hand(2, &[3, 1, 1, 1], &left, &right);

        let outcome = player.make_move().expect("move");
        assert_eq!(outcome.drawn, Card::new(1));
        assert_eq!(outcome.discarded, Card::new(3));
        assert!(outcome.won);
        assert_eq!(player.hand(), vec![Card::new(1); 4]);
        assert_eq!(left.snapshot(), vec![Card::new(1); 3]);
        assert_eq!(right.snapshot(), vec![Card::new(3); 5]);

        let expected_left = deck_of(1, &[1, 1, 1]);
        let expected_right = deck_of(2, &[3, 3, 3, 3, 3]);
        assert!(left.same_cards(&*expected_left));
        assert!(right.same_cards(&*expected_right));
    }

    #[test]
    fn returns_drawn_card_when_whole_hand_matches_id() {
        let left = deck_of(1, &[1]);
        let right = deck_of(2, &[]);
        let mut player = player_with_hand(1, &[1, 1, 1, 1], &left, &right);

        let outcome = player.make_move().expect("move");
        assert_eq!(outcome.drawn, Card::new(1));
        assert_eq!(outcome.discarded, Card::new(1));
        assert!(outcome.won);
        assert_eq!(player.hand(), vec![Card::new(1); 4]);
        assert_eq!(right.snapshot(), vec![Card::new(1)]);
    }

    #[test]
    fn drawn_card_is_first_differing_when_hand_matches_id() {
        let left = deck_of(2, &[9]);
        let right = deck_of(3, &[]);
        let mut player = player_with_hand(3, &[3, 3, 3, 3], &left, &right);

        let outcome = player.make_move().expect("move");
        assert_eq!(outcome.discarded, Card::new(9));
        assert!(outcome.won);
    }

    #[test]
    fn empty_draw_deck_is_fatal() {
        let left = deck_of(4, &[]);
        let right = deck_of(1, &[]);
        let mut player = player_with_hand(1, &[1, 2, 3, 4], &left, &right);

        let err = player.make_move().expect_err("must fail");
        assert!(matches!(err, GameError::EmptyDraw(4)));
        // Hand untouched by the failed draw.
        assert_eq!(player.hand().len(), HAND_SIZE);
    }

    #[test]
    fn win_requires_uniform_denomination() {
        let left = deck_of(1, &[]);
        let right = deck_of(2, &[]);
        let player = player_with_hand(2, &[5, 5, 5, 5], &left, &right);
        assert!(player.has_won());
        let player = player_with_hand(2, &[5, 5, 5, 2], &left, &right);
        assert!(!player.has_won());
    }
}
