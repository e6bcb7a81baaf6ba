pub mod forms;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /forms                                    list schemas
/// /forms/{schema}                           describe schema
/// /forms/{schema}/validate                  dry-run validation (POST)
/// /forms/{schema}/submit                    validate and accept (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/forms", forms::router())
}
