//! Route definitions for the `/forms` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /                    -> list_schemas
/// GET    /{schema}            -> get_schema
/// POST   /{schema}/validate   -> validate   (dry-run)
/// POST   /{schema}/submit     -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list_schemas))
        .route("/{schema}", get(forms::get_schema))
        .route("/{schema}/validate", post(forms::validate))
        .route("/{schema}/submit", post(forms::submit))
}
