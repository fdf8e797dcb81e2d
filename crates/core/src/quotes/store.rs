//! Immutable in-memory quote store.
//!
//! Built once at startup from the seed collection. Two indices are
//! derived during construction: id -> position (unique keys) and
//! tag -> positions in seed order. No mutation path exists afterwards,
//! so the store is shared across request handlers without locking.

use std::collections::HashMap;

use super::model::Quote;
use super::seed;

pub struct QuoteStore {
    quotes: Vec<Quote>,
    by_id: HashMap<String, usize>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl QuoteStore {
    /// Build a store over the compiled-in seed collection.
    pub fn seeded() -> Self {
        Self::new(seed::seed_quotes())
    }

    /// Build a store over an arbitrary quote collection.
    ///
    /// # Panics
    ///
    /// Panics on an empty collection, duplicate ids, or quotes missing
    /// `id`, `text`, or `author`. The collection is compiled in, so a
    /// bad one is a programming error caught at startup.
    pub fn new(quotes: Vec<Quote>) -> Self {
        assert!(!quotes.is_empty(), "quote store requires at least one quote");

        let mut by_id = HashMap::with_capacity(quotes.len());
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, quote) in quotes.iter().enumerate() {
            assert!(!quote.id.is_empty(), "quote at position {pos} has an empty id");
            assert!(!quote.text.is_empty(), "quote {} has empty text", quote.id);
            assert!(!quote.author.is_empty(), "quote {} has an empty author", quote.id);
            let previous = by_id.insert(quote.id.clone(), pos);
            assert!(previous.is_none(), "duplicate quote id {}", quote.id);
            for tag in &quote.tags {
                let positions = by_tag.entry(tag.clone()).or_default();
                // A tag repeated within one quote must not list it twice.
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }

        Self {
            quotes,
            by_id,
            by_tag,
        }
    }

    /// The full collection in seed order.
    pub fn all_quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes held; the bound for random selection.
    pub fn count(&self) -> usize {
        self.quotes.len()
    }

    pub(crate) fn get(&self, position: usize) -> &Quote {
        &self.quotes[position]
    }

    pub(crate) fn position_of_id(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub(crate) fn positions_for_tag(&self, tag: &str) -> &[usize] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }
}
