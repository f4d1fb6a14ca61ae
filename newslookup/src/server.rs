//! HTTP adapter: serve lookups as HTML pages.
//!
//! A single route `/` takes the lookup fields from the query string (GET) or
//! an urlencoded form body (POST):
//!
//! | field    | request field |
//! |----------|---------------|
//! | `choice` | mode          |
//! | `state`  | state         |
//! | `year`   | year          |
//! | `begin`  | range begin   |
//! | `end`    | range end     |

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Form, Router,
};
use newslookuplib::{Catalog, LookupError, LookupRequest, OutputFormat};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::render::render_lookup;

/// Form fields accepted by the lookup route; absent fields are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LookupParams {
    pub choice: String,
    pub state: String,
    pub year: String,
    pub begin: String,
    pub end: String,
}

impl From<LookupParams> for LookupRequest {
    fn from(params: LookupParams) -> Self {
        LookupRequest::new()
            .mode(params.choice)
            .state(params.state)
            .year(params.year)
            .range(params.begin, params.end)
    }
}

/// Build the application router around a shared catalog.
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", any(lookup_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(catalog: Arc<Catalog>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!("listening on http://{addr}");

    axum::serve(listener, router(catalog))
        .await
        .context("server error")?;

    Ok(())
}

async fn lookup_handler(
    State(catalog): State<Arc<Catalog>>,
    method: Method,
    form: std::result::Result<Form<LookupParams>, FormRejection>,
) -> Response {
    if method != Method::GET && method != Method::POST {
        return text_response(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("unsupported method: [{method}]"),
        );
    }

    let Form(params) = match form {
        Ok(form) => form,
        Err(rejection) => return text_response(rejection.status(), rejection.body_text()),
    };
    let request = LookupRequest::from(params);

    // Lookups hold the store's connection lock; keep them off the async workers
    let outcome =
        tokio::task::spawn_blocking(move || render_lookup(&catalog, &request, OutputFormat::Html))
            .await;

    match outcome {
        Ok(Ok(page)) => Html(page).into_response(),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "lookup failed");
            text_response(status_for(&err), err.to_string())
        }
        Err(err) => text_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("lookup task failed: {err}"),
        ),
    }
}

fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn text_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
