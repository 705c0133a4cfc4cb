pub mod accounts;
pub mod health;
pub mod onboarding;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /accounts                        list, create
/// /accounts/{id}                   get, update, deactivate
///
/// /onboarding/submit-answers       score and persist a quiz submission
/// /onboarding/save-feedback        attach feedback to an onboarding record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account CRUD.
        .nest("/accounts", accounts::router())
        // Personality-assessment onboarding flow.
        .nest("/onboarding", onboarding::router())
}
