//! LIST command - Show every item.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, Item, format_name, format_price, items_url, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// Response from listing items.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ListItemsResponse {
    pub items: Vec<Item>,
}

impl HumanReadable for ListItemsResponse {
    fn print_human(&self) {
        println!("{}", "Shopping List".green().bold());
        println!("{}", "=".repeat(40));
        println!();

        if self.items.is_empty() {
            println!("  {}", "(No items)".dimmed());
            return;
        }

        for item in &self.items {
            println!(
                "  {} {:>10}",
                format!("{:<28}", format_name(item.name.as_ref())).bold(),
                format_price(item.price.as_ref())
            );
        }

        let total: f64 = self
            .items
            .iter()
            .filter_map(|i| i.price.as_ref()?.as_f64())
            .sum();
        println!();
        println!("  {} {}", "Items:".cyan(), self.items.len());
        let total = serde_json::Value::from(total);
        println!("  {} {}", "Total:".cyan(), format_price(Some(&total)));
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let url = items_url(base_url, None)?;

    let response: ListItemsResponse = make_request(client.get(url)).await?;

    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_is_bare_array() {
        let json = r#"[{"name":"snickers","price":1.99},{"name":"reeses","price":1.75}]"#;
        let response: ListItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(
            response.items[1].name.as_ref().and_then(|n| n.as_str()),
            Some("reeses")
        );
    }
}
