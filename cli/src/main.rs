//! Command-line interface for the shopping list service.
//!
//! This CLI tool provides commands for all item operations:
//! - list: Show every item
//! - get: Show a single item
//! - add: Add an item
//! - update: Rename and reprice an item
//! - delete: Remove an item
//!
//! Configuration via environment:
//! - SHOPPING_URL: Base URL of the shopping server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, update::UpdateArgs,
};

/// Shopping list CLI
///
/// Prints JSON by default, or formatted text with --human.
#[derive(Parser)]
#[command(name = "shopping")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Shopping server URL
    #[arg(
        long,
        env = "SHOPPING_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items
    List(ListArgs),

    /// Show a single item
    Get(GetArgs),

    /// Add an item
    Add(AddArgs),

    /// Rename and reprice an item
    Update(UpdateArgs),

    /// Delete an item
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, &cli.url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, &cli.url, cli.human, args).await,
        Commands::Update(args) => {
            commands::update::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
