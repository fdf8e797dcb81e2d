use super::model::Quote;

/// Trait for read-only quote lookups.
///
/// All operations are synchronous, side-effect-free reads over the
/// store; callers receive copies. Absence is reported as `None` or an
/// empty vec, never as an error.
pub trait QuoteServiceTrait: Send + Sync {
    fn random_quote(&self) -> Quote;
    fn quote_by_id(&self, id: &str) -> Option<Quote>;
    fn quotes_by_tag(&self, tag: &str) -> Vec<Quote>;
}
