//! Display state machine for the quote UI.
//!
//! The three states keep loading-and-showing-at-once unrepresentable:
//! a rendering surface matches on [`DisplayState`] and draws exactly
//! one of a spinner, a placeholder, or the quote.

use log::warn;
use quotery_core::Quote;

use crate::fetcher::QuoteFetcher;

/// What the rendering surface should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// A fetch is in flight.
    Loading,
    /// No quote available and nothing in flight.
    Empty,
    /// A quote is ready to render.
    Showing(Quote),
}

/// Holds the currently shown quote and drives re-fetches against the
/// query endpoint.
pub struct QuoteDisplay<F> {
    fetcher: F,
    state: DisplayState,
}

impl<F: QuoteFetcher> QuoteDisplay<F> {
    /// Start from a pre-rendered quote when the page handed one over,
    /// otherwise start empty and let [`ensure_quote`] fill in.
    ///
    /// [`ensure_quote`]: QuoteDisplay::ensure_quote
    pub fn new(fetcher: F, initial_quote: Option<Quote>) -> Self {
        let state = match initial_quote {
            Some(quote) => DisplayState::Showing(quote),
            None => DisplayState::Empty,
        };
        Self { fetcher, state }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// True while a fetch is outstanding; the UI disables the "new
    /// quote" trigger on this.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, DisplayState::Loading)
    }

    /// Fetch an initial quote if none was provided at construction.
    pub async fn ensure_quote(&mut self) {
        if matches!(self.state, DisplayState::Empty) {
            self.request_new_quote().await;
        }
    }

    /// The user-triggered "new quote" action. A no-op while a fetch is
    /// already in flight, so rapid triggers cannot race each other to
    /// set the displayed quote.
    ///
    /// On failure the display lands in `Empty`; the failure is logged
    /// and never retried.
    pub async fn request_new_quote(&mut self) {
        if self.is_loading() {
            return;
        }
        self.state = DisplayState::Loading;
        self.state = match self.fetcher.fetch_random().await {
            Ok(quote) => DisplayState::Showing(quote),
            Err(err) => {
                warn!("Failed to fetch quote: {}", err);
                DisplayState::Empty
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use quotery_core::{Error, Result};

    use super::*;

    fn sample_quote() -> Quote {
        Quote {
            id: "1".to_string(),
            text: "Some text".to_string(),
            author: "Someone".to_string(),
            tags: vec!["life".to_string()],
        }
    }

    struct StubFetcher {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubFetcher {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteFetcher for StubFetcher {
        async fn fetch_random(&self) -> Result<Quote> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Error::Transport("connection refused".to_string()))
            } else {
                Ok(sample_quote())
            }
        }
    }

    #[test]
    fn starts_showing_when_handed_an_initial_quote() {
        let display = QuoteDisplay::new(StubFetcher::ok(), Some(sample_quote()));
        assert_eq!(*display.state(), DisplayState::Showing(sample_quote()));
    }

    #[tokio::test]
    async fn ensure_quote_fetches_when_starting_empty() {
        let mut display = QuoteDisplay::new(StubFetcher::ok(), None);
        assert_eq!(*display.state(), DisplayState::Empty);

        display.ensure_quote().await;
        assert_eq!(*display.state(), DisplayState::Showing(sample_quote()));
        assert_eq!(display.fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn ensure_quote_leaves_an_existing_quote_alone() {
        let mut display = QuoteDisplay::new(StubFetcher::ok(), Some(sample_quote()));
        display.ensure_quote().await;
        assert_eq!(display.fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_fetch_lands_in_empty_without_retry() {
        let mut display = QuoteDisplay::new(StubFetcher::failing(), None);
        display.request_new_quote().await;
        assert_eq!(*display.state(), DisplayState::Empty);
        assert_eq!(display.fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn trigger_is_ignored_while_a_fetch_is_in_flight() {
        let mut display = QuoteDisplay::new(StubFetcher::ok(), None);
        display.state = DisplayState::Loading;

        display.request_new_quote().await;
        assert_eq!(display.fetcher.call_count(), 0);
        assert!(display.is_loading());
    }

    #[tokio::test]
    async fn new_quote_replaces_the_shown_one() {
        let mut display = QuoteDisplay::new(StubFetcher::ok(), Some(sample_quote()));
        display.request_new_quote().await;
        assert_eq!(*display.state(), DisplayState::Showing(sample_quote()));
        assert_eq!(display.fetcher.call_count(), 1);
    }
}
