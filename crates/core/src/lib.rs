//! Quotery Core - domain entities, the quote store, and the lookup service.
//!
//! This crate contains the core business logic for Quotery. It is free
//! of I/O: the seeded quote collection lives in process memory and the
//! lookup service is a pure read layer over it. The server and client
//! crates build on the types defined here.

pub mod errors;
pub mod quotes;

// Re-export common types
pub use quotes::{Quote, QuoteService, QuoteServiceTrait, QuoteStore};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
