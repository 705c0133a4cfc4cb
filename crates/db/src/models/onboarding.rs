//! Onboarding entity model.

use serde::Serialize;
use sqlx::FromRow;

use mastery_core::types::{DbId, Timestamp};

/// A row from the `onboarding` table: the persisted result of a user's
/// personality quiz. One row per user (`user_id` is unique).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Onboarding {
    pub id: DbId,
    pub user_id: DbId,
    /// Winning category code (e.g. `"A"`).
    pub primary_personality: Option<String>,
    /// Category -> percentage share map.
    pub specific_personality: Option<serde_json::Value>,
    /// The submitted answer items, verbatim.
    pub detailed_qa: Option<serde_json::Value>,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
