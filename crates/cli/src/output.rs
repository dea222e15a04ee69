use anyhow::Context;
use quartet_core::{Card, GameEvent, GameReport};
use std::fs;
use std::path::Path;

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Drew { player, card, deck } => {
            format!("player {player} draws a {card} from deck {deck}")
        }
        GameEvent::Discarded { player, card, deck } => {
            format!("player {player} discards a {card} to deck {deck}")
        }
        GameEvent::Hand { player, cards } => {
            format!("player {player} current hand is {}", format_cards(cards))
        }
        GameEvent::Won { player } => format!("player {player} wins"),
        GameEvent::WinnerSeen { player, winner } => {
            format!("player {player} has seen that player {winner} has won")
        }
        GameEvent::Exited { player, hand } => {
            format!("player {player} exits with hand {}", format_cards(hand))
        }
    }
}

/// Writes one narration file per player and one contents file per deck
/// into `dir`, creating it if needed.
pub fn write_game_outputs(report: &GameReport, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    for log in &report.logs {
        let path = dir.join(format!("player{}_output.txt", log.id));
        let mut body = String::new();
        for event in &log.events {
            body.push_str(&describe_event(event));
            body.push('\n');
        }
        fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;
    }
    for deck in &report.decks {
        let path = dir.join(format!("deck{}_output.txt", deck.id));
        let body = format!("deck {} contents: {}\n", deck.id, format_cards(&deck.cards));
        fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

/// The stdout summary: the winner, then every ring object in ring order.
pub fn render_report(report: &GameReport) -> String {
    let mut out = format!("player {} wins\n", report.winner);
    for (hand, deck) in report.hands.iter().zip(report.decks.iter()) {
        out.push_str(&format!(
            "player {} final hand: {}\n",
            hand.id,
            format_cards(&hand.cards)
        ));
        out.push_str(&format!(
            "deck {} final contents: {}\n",
            deck.id,
            format_cards(&deck.cards)
        ));
    }
    out
}
