//! Command-line front end for the book record store. The binary is pure
//! plumbing: each subcommand translates directly into one store call and
//! prints whatever comes back. All state lives in the SQLite file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use book_record_store::{default_db_path, export_csv, BookRecord, BookStore, Field};

/// CLI-side mirror of [`Field`] with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliField {
    Title,
    Category,
    Year,
}

impl From<CliField> for Field {
    fn from(field: CliField) -> Self {
        match field {
            CliField::Title => Field::Title,
            CliField::Category => Field::Category,
            CliField::Year => Field::Year,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "book-record-store")]
#[command(about = "Manage a local table of book records")]
struct Cli {
    /// Path to the SQLite database file. Defaults to
    /// `~/.book-record-store/books.sqlite`.
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new record.
    Add {
        title: String,
        category: String,
        /// Publication year; must be a whole number.
        year: String,
    },
    /// List every record in insertion order.
    List,
    /// List records whose title contains the given text.
    Search { needle: String },
    /// Change a single field of an existing record.
    Set {
        id: i64,
        #[arg(value_enum)]
        field: CliField,
        value: String,
    },
    /// Permanently delete a record by id.
    Remove { id: i64 },
    /// Export every record to a CSV file at the given path.
    Export { output: PathBuf },
}

/// Open the store, run one subcommand against it, and report the outcome.
///
/// Returning a `Result` bubbles fatal problems (an unwritable data
/// directory, a rejected input, a missing record id) to the terminal with
/// a message naming the cause.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_path = match cli.database {
        Some(path) => path,
        None => default_db_path().context("could not locate home directory")?,
    };
    let store = BookStore::open(&db_path)
        .with_context(|| format!("could not open database at {}", db_path.display()))?;

    match cli.command {
        Command::Add {
            title,
            category,
            year,
        } => {
            let id = store.create(&title, &category, &year)?;
            println!("added record {id}: {}", store.get(id)?);
        }
        Command::List => {
            print_records(&store.list_all()?);
            println!("{} record(s)", store.count()?);
        }
        Command::Search { needle } => {
            print_records(&store.search(&needle)?);
        }
        Command::Set { id, field, value } => {
            store.update_field(id, field.into(), &value)?;
            println!("updated record {id}: {}", store.get(id)?);
        }
        Command::Remove { id } => {
            store.delete(id)?;
            println!("removed record {id}");
        }
        Command::Export { output } => {
            let records = store.list_all()?;
            export_csv(&records, &output)
                .with_context(|| format!("could not export to {}", output.display()))?;
            println!("exported {} record(s) to {}", records.len(), output.display());
        }
    }

    store.close()?;
    Ok(())
}

/// Print records one per line with aligned columns, mirroring the CSV
/// column order.
fn print_records(records: &[BookRecord]) {
    for record in records {
        println!(
            "{:>6}  {:<40}  {:<20}  {}",
            record.id, record.title, record.category, record.year
        );
    }
}
