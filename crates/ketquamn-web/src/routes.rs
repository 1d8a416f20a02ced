use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use ketquamn_seo::ping::SearchEngine;
use ketquamn_seo::robots::robots_txt;
use ketquamn_seo::sitemap::{lottery_sitemap, news_sitemap, sitemap_index, vietnam_today};
use ketquamn_seo::vitals::{forward_metric, WebVitalMetric};
use serde_json::json;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const CACHE_ONE_HOUR: &str = "public, max-age=3600, s-maxage=3600";

fn xml_response(xml: String) -> Response {
    (
        [(CONTENT_TYPE, XML_CONTENT_TYPE), (CACHE_CONTROL, CACHE_ONE_HOUR)],
        xml,
    )
        .into_response()
}

pub async fn robots_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, TEXT_CONTENT_TYPE), (CACHE_CONTROL, CACHE_ONE_HOUR)],
        robots_txt(&state.config),
    )
}

pub async fn sitemap_index_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let xml = sitemap_index(&state.config, Utc::now())?;
    Ok(xml_response(xml))
}

pub async fn lottery_sitemap_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let now = Utc::now();
    let xml = lottery_sitemap(&state.config, vietnam_today(now), now)?;
    Ok(xml_response(xml))
}

pub async fn news_sitemap_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let xml = news_sitemap(&state.config, vietnam_today(Utc::now()))?;
    Ok(xml_response(xml))
}

/// Ping Google and Bing with the sitemap URL and report both status codes.
pub async fn ping_sitemap_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let sitemap = state.config.sitemap_url();

    let (google, bing) = tokio::try_join!(
        state.ping.send(SearchEngine::Google, &sitemap),
        state.ping.send(SearchEngine::Bing, &sitemap),
    )
    .inspect_err(|e| warn!("sitemap ping failed: {e}"))?;

    info!(google, bing, "sitemap pinged");

    Ok(Json(json!({
        "success": true,
        "timestamp": Utc::now().to_rfc3339(),
        "sitemap": sitemap,
        "google": { "pinged": is_success(google), "status": google },
        "bing": { "pinged": is_success(bing), "status": bing },
    })))
}

/// Accept a Web Vitals beacon and forward it to the analytics sink.
pub async fn vitals_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WebVitalMetric>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(metric) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;
    forward_metric(state.sink.as_ref(), &metric).await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
