use std::io::Write;

use anyhow::{Context, Result};

use linguacards_lib::flashcards::ReviewOutcome;

use crate::app::App;
use crate::render::json::outcome_value;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &mut App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    match format {
        OutputFormat::Json => {
            // Prompts go to stderr so stdout carries only the result
            let mut prompts = std::io::stderr().lock();
            let outcome = app
                .review(&mut input, &mut prompts)
                .context("Review session failed")?;
            println!("{}", serde_json::to_string_pretty(&outcome_value(&outcome)?)?);
        }
        OutputFormat::Plain => {
            let mut output = std::io::stdout().lock();
            let outcome = app
                .review(&mut input, &mut output)
                .context("Review session failed")?;
            write_summary(&mut output, &outcome, use_color)?;
        }
    }
    Ok(())
}

/// One-line summary printed after a completed pass
pub fn write_summary<W: Write + ?Sized>(out: &mut W, outcome: &ReviewOutcome, use_color: bool) -> Result<()> {
    if let ReviewOutcome::Completed { due, reviewed, correct } = outcome {
        let color = if correct == reviewed { Color::GREEN } else { Color::YELLOW };
        let line = format!("Reviewed {} of {} due cards, {} correct.", reviewed, due, correct);
        writeln!(out, "{}", paint(&line, color, use_color))?;
    }
    Ok(())
}
