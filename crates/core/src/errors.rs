//! Shared error taxonomy.
//!
//! In-memory lookups report absence as `Option` or an empty sequence
//! rather than an error. The variants here cover the HTTP boundary on
//! both sides: the server maps them to status codes, the client maps
//! status codes and transport failures back into them.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested id or tag matched nothing. Expected and
    /// user-facing; surfaced as 404, never logged as an error.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A client-side fetch failed before a usable response arrived.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Any other fault. Surfaced as a generic 500 without detail.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
