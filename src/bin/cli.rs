//! ShelfDB CLI
//!
//! Operator tool over a local data directory: string keys, string values,
//! one table per invocation. No server, no network.

use clap::{Parser, Subcommand};
use shelfdb::{Config, Database, Table};
use tracing_subscriber::{fmt, EnvFilter};

/// ShelfDB CLI
#[derive(Parser, Debug)]
#[command(name = "shelf-cli")]
#[command(about = "CLI for the ShelfDB embedded key-value store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./shelfdb_data")]
    data_dir: String,

    /// Table to operate on
    #[arg(short, long, default_value = "default")]
    table: String,

    /// Disable the read cache (skips the startup preload)
    #[arg(long)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all keys in the table
    Keys,

    /// Check whether a key exists
    Exists {
        /// The key to check
        key: String,
    },

    /// Delete every entry in the table
    Clear,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shelfdb=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .root_dir(&args.data_dir)
        .file_backed(!args.no_cache)
        .build();

    let db = Database::new(config);
    let table: Table<String, String> = match db.table(&args.table) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to open table '{}': {}", args.table, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&table, args.command) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(table: &Table<String, String>, command: Commands) -> shelfdb::Result<()> {
    match command {
        Commands::Get { key } => match table.get(&key)? {
            Some(value) => println!("{}", value),
            None => println!("(absent)"),
        },
        Commands::Set { key, value } => {
            table.put(key, value)?;
            println!("OK");
        }
        Commands::Del { key } => {
            let deleted = table.delete(&key)?;
            println!("{}", if deleted { "deleted" } else { "(absent)" });
        }
        Commands::Keys => {
            for key in table.keys()? {
                println!("{}", key);
            }
        }
        Commands::Exists { key } => {
            println!("{}", table.exists(&key)?);
        }
        Commands::Clear => {
            table.clear()?;
            println!("OK");
        }
    }
    Ok(())
}
