//! UPDATE command - Rename and reprice an item.
//!
//! The server overwrites both fields, so both flags are required.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, Item, items_url, make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Current item name
    pub name: String,

    /// New name
    #[arg(long = "name")]
    pub new_name: String,

    /// New price
    #[arg(long)]
    pub price: f64,
}

/// Request body for updating an item.
#[derive(Serialize)]
struct UpdateItemRequest {
    name: String,
    price: f64,
}

/// Response from updating an item.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateItemResponse {
    pub updated: Item,
}

impl HumanReadable for UpdateItemResponse {
    fn print_human(&self) {
        println!("{}", "Item updated successfully!".green().bold());
        println!();
        self.updated.print_fields();
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = items_url(base_url, Some(&args.name))?;

    let request_body = UpdateItemRequest {
        name: args.new_name,
        price: args.price,
    };

    let response: UpdateItemResponse =
        make_request(client.patch(url).json(&request_body)).await?;

    output(&response, human)
}
