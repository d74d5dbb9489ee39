//! Command implementations for the shopping CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Server { status: u16, message: String },

    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// An item as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

impl Item {
    /// Print the item as an indented name/price pair.
    pub fn print_fields(&self) {
        println!("  {} {}", "Name:".cyan(), format_name(self.name.as_ref()));
        println!("  {} {}", "Price:".cyan(), format_price(self.price.as_ref()));
    }
}

/// Format a name for human display. Non-string names print as JSON.
pub fn format_name(name: Option<&Value>) -> String {
    match name {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(none)".to_string(),
    }
}

/// Format a price for human display. Non-numeric prices print verbatim.
pub fn format_price(price: Option<&Value>) -> String {
    match price {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(p) => format!("${:.2}", p),
            None => n.to_string(),
        },
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(none)".to_string(),
    }
}

/// Build the URL for `/items`, or `/items/{name}` with the name percent-encoded.
pub fn items_url(base_url: &str, name: Option<&str>) -> Result<Url, CliError> {
    let invalid = |reason: String| CliError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL".to_string()))?;
        segments.pop_if_empty().push("items");
        if let Some(name) = name {
            segments.push(name);
        }
    }
    Ok(url)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Make an HTTP request and handle common error cases.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(CliError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Pull the `error` field out of a JSON error body, or fall back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url() {
        let url = items_url("http://localhost:3000", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/items");

        let url = items_url("http://localhost:3000/", Some("snickers")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/items/snickers");
    }

    #[test]
    fn test_items_url_encodes_name() {
        let url = items_url("http://localhost:3000", Some("new snickers/xl")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/items/new%20snickers%2Fxl");
    }

    #[test]
    fn test_items_url_rejects_garbage() {
        assert!(matches!(
            items_url("not a url", None),
            Err(CliError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error":"Item is not found"}"#),
            "Item is not found"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_server_error_display() {
        let err = CliError::Server {
            status: 400,
            message: "Name is required".to_string(),
        };
        assert_eq!(err.to_string(), "Name is required (400)");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(&serde_json::json!(1.5))), "$1.50");
        assert_eq!(format_price(Some(&serde_json::json!("1.50"))), "1.50");
        assert_eq!(format_price(None), "(none)");
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name(Some(&serde_json::json!("gum"))), "gum");
        assert_eq!(format_name(Some(&serde_json::json!(42))), "42");
        assert_eq!(format_name(None), "(none)");
    }
}
