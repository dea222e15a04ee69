//! Terminal front end: option parsing, the prompt loops for player count
//! and pack file, and rendering of the finished game.

pub mod inputs;
pub mod output;
pub mod setup;

use crate::inputs::InputSource;
use anyhow::Context;
use quartet_core::{Game, Pack};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub json: bool,
    pub out_dir: Option<PathBuf>,
    pub players: Option<String>,
    pub pack: Option<String>,
}

impl RunOptions {
    pub fn from_args(args: &[String]) -> Self {
        let mut options = Self::default();
        let mut idx = 0usize;
        while idx < args.len() {
            match args[idx].as_str() {
                "--json" => options.json = true,
                "--out-dir" => {
                    if let Some(value) = args.get(idx + 1) {
                        options.out_dir = Some(PathBuf::from(value));
                        idx += 1;
                    }
                }
                "--players" => {
                    if let Some(value) = args.get(idx + 1) {
                        options.players = Some(value.clone());
                        idx += 1;
                    }
                }
                "--pack" => {
                    if let Some(value) = args.get(idx + 1) {
                        options.pack = Some(value.clone());
                        idx += 1;
                    }
                }
                _ => {}
            }
            idx += 1;
        }
        options
    }
}

/// Runs one full game: resolve the player count and pack (from options
/// when given, otherwise by prompting), play it out, write the narration
/// files, and print the report. Returns `Ok` without playing when the
/// input source runs dry before both answers arrive.
pub fn run(options: &RunOptions, input: &mut dyn InputSource) -> anyhow::Result<()> {
    let Some(num_players) = resolve_player_count(options, input) else {
        return Ok(());
    };
    let Some(pack) = resolve_pack(options, input, num_players) else {
        return Ok(());
    };

    let game = Game::new(num_players, pack)?;
    let report = game.run()?;

    let out_dir = options
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    output::write_game_outputs(&report, &out_dir)?;

    if options.json {
        let rendered = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{rendered}");
    } else {
        print!("{}", output::render_report(&report));
    }
    Ok(())
}

/// A `--players` value goes through the same validation as a typed
/// answer and falls back to prompting when it is unusable.
fn resolve_player_count(options: &RunOptions, input: &mut dyn InputSource) -> Option<u32> {
    if let Some(raw) = &options.players {
        if let Some(count) = setup::parse_player_count(raw) {
            return Some(count);
        }
        println!("{}", setup::INVALID_PLAYER_COUNT_MSG);
    }
    setup::prompt_player_count(input)
}

fn resolve_pack(
    options: &RunOptions,
    input: &mut dyn InputSource,
    num_players: u32,
) -> Option<Pack> {
    if let Some(path) = &options.pack {
        match setup::load_pack(path, num_players) {
            Ok(pack) => return Some(pack),
            Err(_) => println!("{}", setup::INVALID_PACK_MSG),
        }
    }
    setup::prompt_pack(input, num_players)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_values() {
        let args: Vec<String> = [
            "--json",
            "--out-dir",
            "logs",
            "--players",
            "4",
            "--pack",
            "four.txt",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        let options = RunOptions::from_args(&args);
        assert!(options.json);
        assert_eq!(options.out_dir, Some(PathBuf::from("logs")));
        assert_eq!(options.players.as_deref(), Some("4"));
        assert_eq!(options.pack.as_deref(), Some("four.txt"));
    }

    #[test]
    fn ignores_unknown_arguments() {
        let args: Vec<String> = ["--verbose", "--json"].iter().map(ToString::to_string).collect();
        let options = RunOptions::from_args(&args);
        assert!(options.json);
        assert_eq!(options.players, None);
    }

    #[test]
    fn missing_value_leaves_option_unset() {
        let args: Vec<String> = ["--out-dir"].iter().map(ToString::to_string).collect();
        let options = RunOptions::from_args(&args);
        assert_eq!(options.out_dir, None);
    }
}
