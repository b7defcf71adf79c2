use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::error;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::ImportError;
use crate::fetch::PageFetcher;
use crate::import_recipe;

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    // Optional so that a body without a URL reaches the handler and gets
    // the documented 400 instead of a framework rejection
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

struct AppState {
    fetcher: PageFetcher,
}

/// Build the application router: a single `POST /import` route backed by a
/// shared page fetcher.
pub fn router(settings: &Settings) -> Result<Router, ImportError> {
    let fetcher = PageFetcher::new(settings.fetch_timeout_secs.map(Duration::from_secs))?;
    let state = Arc::new(AppState { fetcher });

    Ok(Router::new()
        .route("/import", post(import))
        .with_state(state))
}

/// Import the recipe behind the submitted URL.
///
/// All failure causes collapse to the same opaque 500 body; the underlying
/// error is only visible in the server log.
async fn import(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImportRequest>,
) -> Response {
    let Some(url) = request.url.filter(|url| !url.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "No URL provided");
    };

    match import_recipe(&state.fetcher, &url).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => {
            error!("Failed to import recipe from {url}: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to extract recipe")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
