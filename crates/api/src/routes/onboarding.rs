//! Route definitions for the onboarding flow.

use axum::routing::post;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding`.
///
/// ```text
/// POST /submit-answers  -> submit_answers (score + persist)
/// POST /save-feedback   -> save_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-answers", post(onboarding::submit_answers))
        .route("/save-feedback", post(onboarding::save_feedback))
}
