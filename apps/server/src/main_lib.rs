use std::sync::Arc;

use quotery_core::{QuoteService, QuoteServiceTrait, QuoteStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("QUOTERY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state() -> Arc<AppState> {
    let store = Arc::new(QuoteStore::seeded());
    tracing::info!("Quote store initialized with {} quotes", store.count());

    let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> =
        Arc::new(QuoteService::new(store));

    Arc::new(AppState { quote_service })
}
