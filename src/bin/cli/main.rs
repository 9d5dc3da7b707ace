mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "linguacards", about = "Vocabulary flashcard drills", version)]
struct Cli {
    /// Card file to use (default: from config, else the data directory)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file to read
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a flashcard
    Add {
        /// The word or question
        front: String,
        /// The translation or answer
        back: String,
    },

    /// Review the cards that are due
    Review,

    /// Show mastery statistics
    Stats,

    /// List all cards
    List,

    /// Launch the interactive menu (default)
    Menu,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let mut app = app::App::new(cli.config.as_deref(), cli.file.as_deref())?;

    match cli.command {
        None | Some(Command::Menu) => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout().lock();
            commands::menu::run(&mut app, &mut input, &mut output, use_color)?;
        }
        Some(Command::Add { front, back }) => {
            commands::add::run(&mut app, front, back, &cli.format)?;
        }
        Some(Command::Review) => {
            commands::review::run(&mut app, &cli.format, use_color)?;
        }
        Some(Command::Stats) => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Some(Command::List) => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}
