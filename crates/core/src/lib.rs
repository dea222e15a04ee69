//! Ring-based card exchange engine: pack validation, dealing, the
//! per-player move protocol, and concurrent win detection. Keep this crate
//! free of terminal and process concerns.

pub mod card;
pub mod deck;
pub mod events;
pub mod game;
pub mod pack;
pub mod player;
pub mod ring;
pub mod winner;

pub use card::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use pack::*;
pub use player::*;
pub use ring::*;
pub use winner::*;
