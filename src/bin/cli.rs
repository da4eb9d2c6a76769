//! bookring CLI
//!
//! Interactive text menu over an in-memory catalog. State lives only for
//! the lifetime of the process.

use std::io::{self, BufRead, Write};

use bookring::command::{optional_input, Command, MenuChoice};
use bookring::{BookUpdate, Catalog, Config, DuplicatePolicy, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// bookring CLI
#[derive(Parser, Debug)]
#[command(name = "bookring-cli")]
#[command(about = "Interactive in-memory library catalog")]
#[command(version)]
struct Args {
    /// Number of hash buckets in the ISBN index
    #[arg(short, long, default_value = "100")]
    buckets: usize,

    /// Maximum number of transactions kept in history
    #[arg(long, default_value = "1000")]
    history_capacity: usize,

    /// Genre used when none is given
    #[arg(long, default_value = "General")]
    default_genre: String,

    /// Refuse to add a book whose ISBN is already in the catalog
    #[arg(long)]
    reject_duplicates: bool,

    /// Skip the banner before each menu
    #[arg(long)]
    no_banner: bool,
}

const BANNER: &str = r"
     _                 _                _
    | |__   ___   ___ | | ___ __(_)_ __   __ _
    | '_ \ / _ \ / _ \| |/ / '__| | '_ \ / _` |
    | |_) | (_) | (_) |   <| |  | | | | | (_| |
    |_.__/ \___/ \___/|_|\_\_|  |_|_| |_|\__, |
                                         |___/
";

fn main() {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookring=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let policy = if args.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Shadow
    };

    let config = Config::builder()
        .bucket_count(args.buckets)
        .history_capacity(args.history_capacity)
        .default_genre(&args.default_genre)
        .duplicate_policy(policy)
        .build();

    let catalog = match Catalog::open(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("bookring v{}", bookring::VERSION);

    if let Err(e) = run(catalog, !args.no_banner) {
        tracing::error!("CLI error: {}", e);
        std::process::exit(1);
    }
}

/// Menu loop. Returns on Exit or end of input.
fn run(mut catalog: Catalog, show_banner: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        if show_banner {
            println!("{}", BANNER);
        }
        println!("\nLibrary Management System");
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            println!("{}. {}", i + 1, choice.label());
        }

        let Some(answer) = prompt(&mut input, "Enter your choice (1-9): ")? else {
            return Ok(());
        };

        let command = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => {
                println!("Exiting the Library System. Goodbye!");
                return Ok(());
            }
            Some(choice) => read_command(&mut input, choice)?,
            None => {
                println!("Invalid choice. Please enter a number between 1 and 9.");
                continue;
            }
        };

        match command {
            Some(command) => println!("{}", catalog.execute(command)),
            None => continue,
        }
    }
}

/// Ask the follow-up questions for a menu choice
///
/// Returns `Ok(None)` when there is nothing to execute.
fn read_command(input: &mut impl BufRead, choice: MenuChoice) -> Result<Option<Command>> {
    let command = match choice {
        MenuChoice::Add => {
            let isbn = ask(input, "Enter ISBN: ")?;
            let title = ask(input, "Enter title: ")?;
            let author = ask(input, "Enter author: ")?;
            let genre = ask(input, "Enter genre (optional, press Enter to skip): ")?;
            Command::Add {
                isbn,
                title,
                author,
                genre: optional_input(&genre),
            }
        }
        MenuChoice::CheckOut => Command::CheckOut {
            isbn: ask(input, "Enter ISBN of the book to check out: ")?,
        },
        MenuChoice::CheckIn => Command::CheckIn {
            isbn: ask(input, "Enter ISBN of the book to check in: ")?,
        },
        MenuChoice::Update => {
            let isbn = ask(input, "Enter ISBN of the book to update: ")?;
            let update = BookUpdate {
                title: optional_input(&ask(input, "Enter new title (or press Enter to skip): ")?),
                author: optional_input(&ask(input, "Enter new author (or press Enter to skip): ")?),
                genre: optional_input(&ask(input, "Enter new genre (or press Enter to skip): ")?),
            };
            if update.is_empty() {
                println!("No updates provided.");
                return Ok(None);
            }
            Command::Update { isbn, update }
        }
        MenuChoice::Remove => Command::Remove {
            isbn: ask(input, "Enter ISBN of the book to remove: ")?,
        },
        MenuChoice::DisplayAll => Command::List,
        MenuChoice::Search => Command::Search {
            isbn: ask(input, "Enter ISBN of the book to search: ")?,
        },
        MenuChoice::History => Command::History,
        MenuChoice::Exit => return Ok(None),
    };
    Ok(Some(command))
}

/// Print a prompt and read one line. `None` at end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Like `prompt`, but end of input reads as an empty answer
fn ask(input: &mut impl BufRead, message: &str) -> Result<String> {
    Ok(prompt(input, message)?.unwrap_or_default())
}
