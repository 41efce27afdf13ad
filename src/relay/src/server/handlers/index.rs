use crate::constants::INDEX_FILE;
use crate::server::state::RelayState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

pub const INDEX_ENDPOINT: &str = "/";

pub async fn index(State(state): State<RelayState>) -> Response {
    let path = state.config().public_dir.join(INDEX_FILE);

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Error serving {}: {}", path.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading page").into_response()
        }
    }
}
