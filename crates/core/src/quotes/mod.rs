//! Quotes module - domain model, immutable store, and lookup service.

mod model;
mod seed;
mod service;
mod store;
mod traits;

pub use model::Quote;
pub use service::QuoteService;
pub use store::QuoteStore;
pub use traits::QuoteServiceTrait;
