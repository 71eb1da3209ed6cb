//! Tiendita CLI - catalogue inspection and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the current remote catalogue
//! tiendita catalog show
//!
//! # Seed the remote catalogue from a local JSON file
//! tiendita catalog seed productos.json
//!
//! # Merge instead of overwrite while seeding
//! tiendita catalog seed --merge extra.json
//! ```
//!
//! # Commands
//!
//! - `catalog show` - Download and print the catalogue document
//! - `catalog seed` - Validate a local JSON file and upload it

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tiendita")]
#[command(author, version, about = "Tiendita CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or seed the remote catalogue
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Download and print the current catalogue
    Show,
    /// Upload a local JSON product list
    Seed {
        /// Path to a JSON array of products
        file: String,

        /// Merge into the existing document instead of replacing it
        #[arg(long)]
        merge: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Show => commands::catalog::show().await?,
            CatalogAction::Seed { file, merge } => {
                commands::catalog::seed(&file, merge).await?;
            }
        },
    }
    Ok(())
}
