//! DELETE command - Remove an item.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, items_url, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Item name to delete
    pub name: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Response from deleting an item.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteItemResponse {
    pub message: String,
}

impl HumanReadable for DeleteItemResponse {
    fn print_human(&self) {
        println!("{}", "Item deleted successfully!".green().bold());
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.name
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = items_url(base_url, Some(&args.name))?;

    let response: DeleteItemResponse = make_request(client.delete(url)).await?;

    output(&response, human)
}
