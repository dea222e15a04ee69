use crate::inputs::InputSource;
use quartet_core::{Pack, PackError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const PLAYER_COUNT_PROMPT: &str = "Please enter the number of players: ";
pub const PACK_PATH_PROMPT: &str = "Please enter the pack file path: ";
pub const INVALID_PLAYER_COUNT_MSG: &str = "Please input a valid player number";
pub const INVALID_PACK_MSG: &str = "Please input a valid file";

/// Accepts any integer the parser can read, then keeps only counts a
/// ring can be built for. Extreme numeric input fails the range check,
/// not the parser.
pub fn parse_player_count(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<i64>().ok()?;
    u32::try_from(value).ok().filter(|count| *count >= 1)
}

/// Asks until a usable player count arrives. Every rejected line prints
/// the same fixed message before re-prompting.
pub fn prompt_player_count(input: &mut dyn InputSource) -> Option<u32> {
    loop {
        let line = input.read_line(PLAYER_COUNT_PROMPT)?;
        match parse_player_count(&line) {
            Some(count) => return Some(count),
            None => println!("{INVALID_PLAYER_COUNT_MSG}"),
        }
    }
}

/// Opens the pack file and runs it through parsing and length
/// validation for the given player count.
pub fn load_pack(path: impl AsRef<Path>, num_players: u32) -> Result<Pack, PackError> {
    let file = File::open(path)?;
    Pack::from_reader(BufReader::new(file), num_players)
}

/// Asks until a pack file loads cleanly. A missing file, a malformed
/// line, and a wrong card count all print the same fixed message.
pub fn prompt_pack(input: &mut dyn InputSource, num_players: u32) -> Option<Pack> {
    loop {
        let line = input.read_line(PACK_PATH_PROMPT)?;
        match load_pack(line.trim(), num_players) {
            Ok(pack) => return Some(pack),
            Err(_) => println!("{INVALID_PACK_MSG}"),
        }
    }
}
