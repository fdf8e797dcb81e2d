//! Read-only lookup service over the quote store.

use std::sync::Arc;

use log::debug;
use rand::Rng;

use super::model::Quote;
use super::store::QuoteStore;
use super::traits::QuoteServiceTrait;

/// Pure in-memory lookups. No I/O, no state carried between calls;
/// the store behind the `Arc` never changes after construction.
pub struct QuoteService {
    store: Arc<QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<QuoteStore>) -> Self {
        Self { store }
    }

    /// Service over the compiled-in seed collection.
    pub fn seeded() -> Self {
        Self::new(Arc::new(QuoteStore::seeded()))
    }
}

impl QuoteServiceTrait for QuoteService {
    /// Uniform selection over the whole collection; immediate repeats
    /// are allowed.
    fn random_quote(&self) -> Quote {
        let index = rand::thread_rng().gen_range(0..self.store.count());
        self.store.get(index).clone()
    }

    fn quote_by_id(&self, id: &str) -> Option<Quote> {
        let found = self.store.position_of_id(id);
        debug!("quote_by_id {}: found={}", id, found.is_some());
        found.map(|position| self.store.get(position).clone())
    }

    fn quotes_by_tag(&self, tag: &str) -> Vec<Quote> {
        self.store
            .positions_for_tag(tag)
            .iter()
            .map(|&position| self.store.get(position).clone())
            .collect()
    }
}
