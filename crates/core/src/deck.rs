use crate::{Card, CardHolder};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// A deck is the FIFO queue sitting between two players on the ring.
/// Both neighbors touch it concurrently, one drawing from the front and
/// one discarding to the back, so every operation takes the deck's own
/// lock. There is no ordering across different decks.
#[derive(Debug)]
pub struct Deck {
    id: u32,
    cards: Mutex<VecDeque<Card>>,
}

impl Deck {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            cards: Mutex::new(VecDeque::new()),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Removes and returns the front card. `None` means the deck ran dry,
    /// which a validated pack never allows between moves; callers treat
    /// it as a broken invariant rather than retrying.
    pub fn draw(&self) -> Option<Card> {
        self.cards.lock().pop_front()
    }

    pub fn add(&self, card: Card) {
        self.cards.lock().push_back(card);
    }

    pub fn len(&self) -> usize {
        self.cards.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.lock().iter().copied().collect()
    }
}

impl CardHolder for Deck {
    fn cards(&self) -> Vec<Card> {
        self.snapshot()
    }

    fn add_card(&mut self, card: Card) {
        self.add(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn draws_in_insertion_order() {
        let deck = Deck::new(1);
        deck.add(Card::new(5));
        deck.add(Card::new(6));
        assert_eq!(deck.draw(), Some(Card::new(5)));
        assert_eq!(deck.draw(), Some(Card::new(6)));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn snapshot_preserves_queue_order() {
        let deck = Deck::new(2);
        for value in [4, 2, 9] {
            deck.add(Card::new(value));
        }
        assert_eq!(
            deck.snapshot(),
            vec![Card::new(4), Card::new(2), Card::new(9)]
        );
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn concurrent_add_and_draw_lose_nothing() {
        let deck = Arc::new(Deck::new(3));
        let producer = {
            let deck = Arc::clone(&deck);
            thread::spawn(move || {
                for value in 1..=500u32 {
                    deck.add(Card::new(value));
                }
            })
        };
        let consumer = {
            let deck = Arc::clone(&deck);
            thread::spawn(move || {
                let mut taken = Vec::new();
                while taken.len() < 500 {
                    if let Some(card) = deck.draw() {
                        taken.push(card);
                    }
                }
                taken
            })
        };
        producer.join().expect("producer");
        let taken = consumer.join().expect("consumer");
        let expected: Vec<Card> = (1..=500).map(Card::new).collect();
        assert_eq!(taken, expected);
        assert!(deck.is_empty());
    }
}
