use crate::Card;
use serde::{Deserialize, Serialize};

/// Everything a player worker wants narrated, in the order it happened.
/// Rendering to text is the front end's business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEvent {
    Drew { player: u32, card: Card, deck: u32 },
    Discarded { player: u32, card: Card, deck: u32 },
    Hand { player: u32, cards: Vec<Card> },
    Won { player: u32 },
    WinnerSeen { player: u32, winner: u32 },
    Exited { player: u32, hand: Vec<Card> },
}

/// Per-worker ordered queue. Each player worker owns its bus, so pushes
/// never cross threads.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<GameEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.queue.drain(..)
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_events_in_push_order() {
        let mut bus = EventBus::default();
        bus.push(GameEvent::Won { player: 1 });
        bus.push(GameEvent::Exited {
            player: 1,
            hand: vec![Card::new(1); 4],
        });
        let events: Vec<GameEvent> = bus.drain().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], GameEvent::Won { player: 1 });
    }
}
