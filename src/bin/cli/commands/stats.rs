use std::io::Write;

use anyhow::Result;

use linguacards_lib::flashcards::StatsReport;

use crate::app::App;
use crate::render::json::stats_value;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.stats();
    let mut out = std::io::stdout().lock();

    match format {
        OutputFormat::Json => {
            let output = stats_value(stats.as_ref())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Plain => write_plain(&mut out, stats.as_ref(), use_color)?,
    }

    Ok(())
}

/// Plain-text report, shared with the interactive menu
pub fn write_plain<W: Write + ?Sized>(out: &mut W, stats: Option<&StatsReport>, use_color: bool) -> Result<()> {
    let Some(report) = stats else {
        writeln!(out, "No cards available.")?;
        return Ok(());
    };

    writeln!(out, "Total cards: {}", report.total_cards)?;
    let percent = format!("{}%", report.mastery_percent);
    writeln!(
        out,
        "Mastered cards: {} ({})",
        report.mastered_cards,
        paint(&percent, Color::BOLD, use_color)
    )?;
    writeln!(out, "Due now: {}", report.due_cards)?;
    Ok(())
}
