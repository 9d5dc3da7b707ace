use anyhow::{Context, Result};

use crate::app::App;
use crate::render::json::card_value;
use crate::OutputFormat;

pub fn run(app: &mut App, front: String, back: String, format: &OutputFormat) -> Result<()> {
    let card = app.add_card(front, back).context("Failed to add card")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card_value(&card, None)?)?);
        }
        OutputFormat::Plain => {
            println!("Card added!");
            println!("  {} -> {}", card.front, card.back);
        }
    }

    Ok(())
}
