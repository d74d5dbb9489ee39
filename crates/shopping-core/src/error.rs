//! Validation errors for item payloads.

use thiserror::Error;

/// Reasons a create payload is rejected.
///
/// The display strings are part of the HTTP contract and are returned
/// verbatim as the `error` field of a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither a name nor a price was supplied.
    #[error("Name and Price is required")]
    MissingNameAndPrice,

    /// Price was supplied but name was not.
    #[error("Name is required")]
    MissingName,

    /// Name was supplied but price was not.
    #[error("Price is required")]
    MissingPrice,
}
