//! Handlers for the personality-assessment onboarding flow.
//!
//! `submit_answers` scores a quiz submission and persists the result in one
//! transaction (flipping the user's onboarding flag); `save_feedback`
//! attaches free-text feedback to an existing onboarding record.
//!
//! Request and response bodies are camelCase -- the wire format predates
//! this service and is shared with its clients.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use mastery_core::error::CoreError;
use mastery_core::scoring::{self, AnswerItem, Category, PercentageMap};
use mastery_core::types::DbId;
use mastery_db::repositories::OnboardingRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /onboarding/submit-answers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersRequest {
    pub user_id: DbId,
    pub items: Vec<AnswerItem>,
}

/// Response body for `POST /onboarding/submit-answers`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersResponse {
    pub primary_personality: Category,
    pub specific_personality: PercentageMap,
}

/// Request body for `POST /onboarding/save-feedback`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFeedbackRequest {
    pub user_id: DbId,
    pub feedback: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/onboarding/submit-answers
///
/// Score the submitted answers, then upsert the user's onboarding record and
/// flip `is_onboarding` in a single transaction. Responds with the winning
/// category and the full percentage map.
pub async fn submit_answers(
    State(state): State<AppState>,
    Json(input): Json<SubmitAnswersRequest>,
) -> AppResult<Json<SubmitAnswersResponse>> {
    let tally = scoring::calculate_points(&input.items)?;
    let (percentages, winner) = scoring::calculate_percentage(&tally);

    let specific_personality = serde_json::to_value(&percentages)
        .map_err(|e| AppError::InternalError(format!("Percentage serialization error: {e}")))?;
    let detailed_qa = serde_json::to_value(&input.items)
        .map_err(|e| AppError::InternalError(format!("Answer serialization error: {e}")))?;

    OnboardingRepo::submit(
        &state.pool,
        input.user_id,
        winner.code(),
        &specific_personality,
        &detailed_qa,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "User",
        id: input.user_id,
    }))?;

    tracing::info!(
        user_id = input.user_id,
        primary = winner.code(),
        total_points = tally.total(),
        "Onboarding submission scored and persisted"
    );

    Ok(Json(SubmitAnswersResponse {
        primary_personality: winner,
        specific_personality: percentages,
    }))
}

/// POST /api/v1/onboarding/save-feedback
///
/// Attach feedback text to the user's onboarding record. Fails with 404 if
/// the user has not submitted the quiz yet; never creates a record.
pub async fn save_feedback(
    State(state): State<AppState>,
    Json(input): Json<SaveFeedbackRequest>,
) -> AppResult<Json<MessageResponse>> {
    OnboardingRepo::save_feedback(&state.pool, input.user_id, input.feedback.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Onboarding record for user",
            id: input.user_id,
        }))?;

    tracing::info!(user_id = input.user_id, "Onboarding feedback saved");

    Ok(Json(MessageResponse {
        message: "Feedback saved successfully",
    }))
}
