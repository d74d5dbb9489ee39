//! ADD command - Add an item.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, Item, items_url, make_request, output};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    pub name: String,

    /// Item price
    pub price: f64,
}

/// Request body for adding an item.
#[derive(Serialize)]
struct AddItemRequest {
    name: String,
    price: f64,
}

/// Response from adding an item.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddItemResponse {
    pub added: Item,
}

impl HumanReadable for AddItemResponse {
    fn print_human(&self) {
        println!("{}", "Item added successfully!".green().bold());
        println!();
        self.added.print_fields();
    }
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let url = items_url(base_url, None)?;

    let request_body = AddItemRequest {
        name: args.name,
        price: args.price,
    };

    let response: AddItemResponse = make_request(client.post(url).json(&request_body)).await?;

    output(&response, human)
}
