//! Quotery Client - HTTP client and display state machine.
//!
//! `QuotesApiClient` talks to the server's query endpoint over HTTP;
//! `QuoteDisplay` drives the loading/empty/showing lifecycle a
//! rendering surface binds to. The two meet at the [`QuoteFetcher`]
//! trait so the state machine can be tested without a network.

mod client;
mod display;
mod fetcher;

pub use client::QuotesApiClient;
pub use display::{DisplayState, QuoteDisplay};
pub use fetcher::QuoteFetcher;
