use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use linguacards_lib::flashcards::ReviewError;

use crate::app::App;
use crate::commands::{review, stats};
use crate::render::terminal::{paint, Color};

const MENU: &str = "\nLinguaCards Menu:\n\
                    1. Add flashcard\n\
                    2. Review flashcards\n\
                    3. Show stats\n\
                    4. Exit\n\
                    Choose an option: ";

/// Interactive menu loop. Returns after `4`, end of input or an input error.
/// The set is saved on every one of those exits.
pub fn run<R, W>(app: &mut App, input: &mut R, output: &mut W, use_color: bool) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let result = run_loop(app, input, output, use_color);
    let saved = app.save();
    result?;
    saved
}

fn run_loop<R, W>(app: &mut App, input: &mut R, output: &mut W, use_color: bool) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            writeln!(output)?;
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some((front, back)) = prompt_card(input, output)? else {
                    break;
                };
                match app.add_card(front, back) {
                    Ok(_) => writeln!(output, "{}", paint("Card added!", Color::GREEN, use_color))?,
                    Err(e) => writeln!(output, "{}", paint(&format!("Could not add card: {}", e), Color::RED, use_color))?,
                }
            }
            "2" => match app.review(input, output) {
                Ok(outcome) => review::write_summary(output, &outcome, use_color)?,
                Err(ReviewError::Storage(e)) => {
                    writeln!(output, "{}", paint(&format!("Could not save progress: {}", e), Color::RED, use_color))?
                }
                Err(e) => return Err(e).context("Review session failed"),
            },
            "3" => stats::write_plain(output, app.stats().as_ref(), use_color)?,
            "4" => break,
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }

    Ok(())
}

fn prompt_card<R, W>(input: &mut R, output: &mut W) -> Result<Option<(String, String)>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "Enter front (word): ")?;
    output.flush()?;
    let Some(front) = read_line(input)? else {
        return Ok(None);
    };

    write!(output, "Enter back (translation): ")?;
    output.flush()?;
    let Some(back) = read_line(input)? else {
        return Ok(None);
    };

    Ok(Some((front, back)))
}

/// One line without its terminator, `None` at end of input
fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read input")? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
