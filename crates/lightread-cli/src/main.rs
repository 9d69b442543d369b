//! lightread CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "lightread",
    version,
    about = "Local-first book club reading tracker"
)]
struct Cli {
    /// State file path
    #[arg(long, global = true, default_value = "lightread.json")]
    state: PathBuf,

    /// Config file with segmenter/quiz tuning (optional)
    #[arg(long, global = true, default_value = "lightread.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config file
    Init,

    /// Create or update the member profile
    Join {
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Title of the book you committed to
        #[arg(long)]
        book_title: String,

        /// Meeting day of the week
        #[arg(long)]
        day: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,
    },

    /// Load a book file and segment it into chapters
    Load {
        /// Path to a .txt/.md book file
        file: PathBuf,
    },

    /// List chapters with progress and quiz scores
    Chapters,

    /// Print a chapter and make it the current one
    Read {
        /// Chapter number (1-based)
        chapter: usize,
    },

    /// Set reading progress on a chapter
    Progress {
        /// Chapter number (1-based)
        chapter: usize,

        /// Percent read, 0-100
        percent: u8,
    },

    /// Generate a comprehension quiz for a chapter
    Quiz {
        /// Chapter number (1-based)
        chapter: usize,

        /// Cap on generated questions
        #[arg(long)]
        max_questions: Option<usize>,
    },

    /// Grade the pending quiz
    Submit {
        /// Comma-separated choice letters, "-" for unanswered (e.g. "A,C,-,B")
        #[arg(long, allow_hyphen_values = true)]
        answers: String,
    },

    /// Show member and book status
    Status,

    /// Print the completion notice for a finished book
    Complete {
        /// Short note to the club admin
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Delete the state file
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lightread_core=info".parse().unwrap())
                .add_directive("lightread_session=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli.config),
        Commands::Join {
            name,
            phone,
            book_title,
            day,
            start_date,
        } => commands::join::execute(&cli.state, name, phone, book_title, day, start_date),
        Commands::Load { file } => commands::load::execute(&cli.state, &cli.config, &file),
        Commands::Chapters => commands::chapters::execute(&cli.state),
        Commands::Read { chapter } => commands::read::execute(&cli.state, chapter),
        Commands::Progress { chapter, percent } => {
            commands::progress::execute(&cli.state, chapter, percent)
        }
        Commands::Quiz {
            chapter,
            max_questions,
        } => commands::quiz::execute(&cli.state, &cli.config, chapter, max_questions),
        Commands::Submit { answers } => commands::submit::execute(&cli.state, &answers),
        Commands::Status => commands::status::execute(&cli.state),
        Commands::Complete { note } => commands::complete::execute(&cli.state, &note),
        Commands::Reset => commands::reset::execute(&cli.state),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
