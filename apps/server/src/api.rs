use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

// Cache lifetimes per query variant. Id lookups are stable for a day,
// tag listings for an hour, random picks for a minute.
const CACHE_BY_ID: &str = "public, max-age=86400";
const CACHE_BY_TAG: &str = "public, max-age=3600";
const CACHE_RANDOM: &str = "public, max-age=60";

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct QuoteQuery {
    id: Option<String>,
    tag: Option<String>,
}

/// The single query endpoint: `id` wins over `tag`, neither means a
/// random pick.
async fn get_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Response> {
    if let Some(id) = query.id {
        let quote = state
            .quote_service
            .quote_by_id(&id)
            .ok_or_else(|| ApiError::NotFound {
                error: "Quote not found",
                message: format!("No quote with id '{}'", id),
            })?;
        return Ok(cached_json(CACHE_BY_ID, quote));
    }

    if let Some(tag) = query.tag {
        let quotes = state.quote_service.quotes_by_tag(&tag);
        if quotes.is_empty() {
            return Err(ApiError::NotFound {
                error: "No quotes found",
                message: format!("No quotes tagged '{}'", tag),
            });
        }
        return Ok(cached_json(CACHE_BY_TAG, quotes));
    }

    let quote = state.quote_service.random_quote();
    Ok(cached_json(CACHE_RANDOM, quote))
}

fn cached_json<T: Serialize>(cache: &'static str, body: T) -> Response {
    let mut response = Json(body).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(cache));
    response
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/quotes", get(get_quotes));

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
