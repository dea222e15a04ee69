use crate::{Card, EventBus, GameEvent, GameRing, Pack, Player, WinnerCell};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot build a ring for {0} players")]
    InvalidPlayerCount(u32),
    #[error("deck {0} was empty on draw")]
    EmptyDraw(u32),
    #[error("player {0} worker panicked")]
    WorkerPanicked(u32),
    #[error("game stopped without a recorded winner")]
    NoWinner,
}

/// One game: the dealt ring plus the shared winner cell and stop flag.
/// `run` consumes the game, drives one worker thread per player, and
/// returns the final state once every worker has stopped.
#[derive(Debug)]
pub struct Game {
    ring: GameRing,
    winner: Arc<WinnerCell>,
    stop: Arc<AtomicBool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalHand {
    pub id: u32,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalDeck {
    pub id: u32,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerLog {
    pub id: u32,
    pub events: Vec<GameEvent>,
}

/// Final state of a finished game: the winner, every ring object's cards
/// in id order, and each player's narration log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    pub winner: u32,
    pub hands: Vec<FinalHand>,
    pub decks: Vec<FinalDeck>,
    pub logs: Vec<PlayerLog>,
}

impl GameReport {
    /// Cards across all hands and decks; stays at `8 * N` for the whole
    /// life of a game built from a validated pack.
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(|hand| hand.cards.len()).sum();
        let in_decks: usize = self.decks.iter().map(|deck| deck.cards.len()).sum();
        in_hands + in_decks
    }
}

impl Game {
    /// Builds the ring and deals the pack. The pack must have been
    /// validated for the same player count; the engine does not re-check
    /// it per operation.
    pub fn new(num_players: u32, pack: Pack) -> Result<Self, GameError> {
        let mut ring = GameRing::build(num_players)?;
        ring.deal(pack);
        Ok(Self {
            ring,
            winner: Arc::new(WinnerCell::new()),
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Runs the game to completion: one thread per player, each executing
    /// the move protocol until a win claim lands or a fatal error raises
    /// the stop flag. The first worker error becomes the run's error.
    pub fn run(self) -> Result<GameReport, GameError> {
        let Game { ring, winner, stop } = self;
        let (players, decks) = ring.into_parts();

        let mut handles = Vec::with_capacity(players.len());
        for player in players {
            let id = player.id();
            let winner = Arc::clone(&winner);
            let stop = Arc::clone(&stop);
            handles.push((id, thread::spawn(move || run_player(player, winner, stop))));
        }

        let mut hands = Vec::with_capacity(handles.len());
        let mut logs = Vec::with_capacity(handles.len());
        let mut failure: Option<GameError> = None;
        for (id, handle) in handles {
            match handle.join() {
                Ok(Ok(finished)) => {
                    hands.push(FinalHand {
                        id: finished.player.id(),
                        cards: finished.player.hand().to_vec(),
                    });
                    logs.push(PlayerLog {
                        id: finished.player.id(),
                        events: finished.events,
                    });
                }
                Ok(Err(err)) => {
                    failure.get_or_insert(err);
                }
                Err(_) => {
                    stop.store(true, Ordering::Release);
                    failure.get_or_insert(GameError::WorkerPanicked(id));
                }
            }
        }
        if let Some(err) = failure {
            return Err(err);
        }

        hands.sort_by_key(|hand| hand.id);
        logs.sort_by_key(|log| log.id);
        let decks = decks
            .iter()
            .map(|deck| FinalDeck {
                id: deck.id(),
                cards: deck.snapshot(),
            })
            .collect();
        let winner = winner.get().ok_or(GameError::NoWinner)?;
        Ok(GameReport {
            winner,
            hands,
            decks,
            logs,
        })
    }
}

struct FinishedPlayer {
    player: Player,
    events: Vec<GameEvent>,
}

/// A set winner cell is the termination signal the workers poll between
/// turns; the stop flag only exists so a fatal move error also brings the
/// other workers down. Checked at the top of each turn, never mid-move.
fn game_over(winner: &WinnerCell, stop: &AtomicBool) -> bool {
    stop.load(Ordering::Acquire) || winner.is_decided()
}

fn run_player(
    mut player: Player,
    winner: Arc<WinnerCell>,
    stop: Arc<AtomicBool>,
) -> Result<FinishedPlayer, GameError> {
    let mut events = EventBus::default();
    let id = player.id();

    // A dealt four-of-a-kind claims before the first move; the discard
    // policy would otherwise break it up on the first draw.
    if player.has_won() && winner.claim(id) {
        events.push(GameEvent::Won { player: id });
    }

    while !game_over(&winner, &stop) {
        let outcome = match player.make_move() {
            Ok(outcome) => outcome,
            Err(err) => {
                stop.store(true, Ordering::Release);
                return Err(err);
            }
        };
        events.push(GameEvent::Drew {
            player: id,
            card: outcome.drawn,
            deck: player.draw_deck().id(),
        });
        events.push(GameEvent::Discarded {
            player: id,
            card: outcome.discarded,
            deck: player.discard_deck().id(),
        });
        events.push(GameEvent::Hand {
            player: id,
            cards: player.hand().to_vec(),
        });
        if outcome.won && winner.claim(id) {
            events.push(GameEvent::Won { player: id });
        }
    }

    match winner.get() {
        Some(winning) if winning != id => {
            events.push(GameEvent::WinnerSeen {
                player: id,
                winner: winning,
            });
        }
        _ => {}
    }
    events.push(GameEvent::Exited {
        player: id,
        hand: player.hand().to_vec(),
    });

    Ok(FinishedPlayer {
        player,
        events: events.into_events(),
    })
}
