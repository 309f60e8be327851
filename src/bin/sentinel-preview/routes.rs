//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page id is reachable at `/preview/{page}`, rendered from its fixture
//! with optional JSON overrides. `/` lists the pages. Static assets, when
//! configured, are served at `/assets`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashMap;
use std::fmt::Write as _;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use sentinel_web::app::render_document;
use sentinel_web::context::fixture::fixture_with;
use sentinel_web::context::{ContextError, PageId};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::PreviewConfig;

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error(transparent)]
    UnknownPage(ContextError),

    #[error("invalid overrides: {0}")]
    Overrides(#[from] serde_json::Error),

    #[error(transparent)]
    Render(ContextError),
}

impl PreviewError {
    pub fn status(&self) -> StatusCode {
        match self {
            PreviewError::UnknownPage(_) => StatusCode::NOT_FOUND,
            PreviewError::Overrides(_) | PreviewError::Render(_) => StatusCode::BAD_REQUEST,
        }
    }
}

pub fn app(config: &PreviewConfig) -> Router {
    let router = Router::new().route("/", get(index)).route("/preview/{page}", get(preview));
    let router = match &config.assets_dir {
        Some(dir) => router.nest_service("/assets", ServeDir::new(dir)),
        None => router,
    };
    router.layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(index_html())
}

async fn preview(
    Path(page): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, StatusCode> {
    preview_document(&page, params.get("overrides").map(String::as_str)).map(Html).map_err(|e| {
        tracing::warn!(%page, error = %e, "preview failed");
        e.status()
    })
}

/// Links to the preview of every page id.
pub fn index_html() -> String {
    let mut items = String::new();
    for page in PageId::ALL {
        let _ = write!(items, "<li><a href=\"/preview/{page}\">{page}</a></li>");
    }
    format!("<!DOCTYPE html><html lang=\"en\"><head><title>Sentinel pages</title></head><body><ul>{items}</ul></body></html>")
}

/// Full document for the fixture of `page`, with `overrides` merged in.
pub fn preview_document(page: &str, overrides: Option<&str>) -> Result<String, PreviewError> {
    let page = page.parse::<PageId>().map_err(PreviewError::UnknownPage)?;
    let overrides = match overrides {
        Some(raw) => serde_json::from_str(raw)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };
    let ctx = fixture_with(page, &overrides).map_err(PreviewError::Render)?;
    render_document(&ctx, &ctx.urls().base_path).map_err(PreviewError::Render)
}
