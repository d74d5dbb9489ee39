//! GET command - Show a single item.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{HumanReadable, Item, items_url, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Item name
    pub name: String,
}

impl HumanReadable for Item {
    fn print_human(&self) {
        println!("{}", "Item".green().bold());
        println!();
        self.print_fields();
    }
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = items_url(base_url, Some(&args.name))?;

    let response: Item = make_request(client.get(url)).await?;

    output(&response, human)
}
