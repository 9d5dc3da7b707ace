use anyhow::Result;

use crate::app::App;
use crate::render::json::card_value;
use crate::render::terminal::{format_timestamp, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let cards = app.store.all_cards();

    match format {
        OutputFormat::Json => {
            let output = cards
                .iter()
                .map(|card| card_value(card, Some(app.is_due(card))))
                .collect::<serde_json::Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("(no cards)");
                return Ok(());
            }
            for card in cards {
                let due = if app.is_due(card) {
                    paint(" [due]", Color::YELLOW, use_color)
                } else {
                    String::new()
                };
                println!(
                    "{} -> {}  {}{}",
                    card.front,
                    card.back,
                    paint(
                        &format!("({} correct, last {})", card.correct_count, format_timestamp(card.last_review)),
                        Color::GRAY,
                        use_color,
                    ),
                    due
                );
            }
        }
    }

    Ok(())
}
