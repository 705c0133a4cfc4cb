//! Repository for the `onboarding` table.

use sqlx::PgPool;

use mastery_core::types::DbId;

use crate::models::onboarding::Onboarding;

/// Column list for `onboarding` queries.
const COLUMNS: &str = "id, user_id, primary_personality, specific_personality, \
                        detailed_qa, feedback, created_at, updated_at";

/// Provides persistence for personality-quiz results and feedback.
pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Persist a scored quiz submission for a user.
    ///
    /// Runs in a single transaction:
    /// 1. Flip `users.is_onboarding` to false. If no user row matches,
    ///    return `Ok(None)` -- the transaction is dropped, rolling back
    ///    everything.
    /// 2. Upsert the onboarding row keyed by `user_id`, overwriting the
    ///    personality fields and detailed answers. `feedback` is left
    ///    untouched, so resubmission preserves it.
    ///
    /// The unique constraint on `user_id` guarantees at most one row per
    /// user even under concurrent submissions.
    pub async fn submit(
        pool: &PgPool,
        user_id: DbId,
        primary_personality: &str,
        specific_personality: &serde_json::Value,
        detailed_qa: &serde_json::Value,
    ) -> Result<Option<Onboarding>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let flagged = sqlx::query(
            "UPDATE users SET is_onboarding = false, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        if flagged.rows_affected() == 0 {
            // Referenced user does not exist; dropping the transaction
            // rolls back the whole submission.
            tracing::debug!(user_id, "Onboarding submission for unknown user, rolling back");
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO onboarding
                (user_id, primary_personality, specific_personality, detailed_qa)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE SET
                primary_personality = EXCLUDED.primary_personality,
                specific_personality = EXCLUDED.specific_personality,
                detailed_qa = EXCLUDED.detailed_qa,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, Onboarding>(&query)
            .bind(user_id)
            .bind(primary_personality)
            .bind(specific_personality)
            .bind(detailed_qa)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(record))
    }

    /// Set the feedback text on a user's existing onboarding record.
    ///
    /// Returns `None` if the user has no onboarding record; never creates
    /// one. Does not touch the `users` table.
    pub async fn save_feedback(
        pool: &PgPool,
        user_id: DbId,
        feedback: Option<&str>,
    ) -> Result<Option<Onboarding>, sqlx::Error> {
        let query = format!(
            "UPDATE onboarding SET feedback = $2, updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Onboarding>(&query)
            .bind(user_id)
            .bind(feedback)
            .fetch_optional(pool)
            .await
    }

    /// Find a user's onboarding record.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Onboarding>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM onboarding WHERE user_id = $1");
        sqlx::query_as::<_, Onboarding>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
