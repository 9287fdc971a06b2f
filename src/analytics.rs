//! Admin dashboard aggregates.

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use serde::Serialize;
use sqlx::FromRow;
use tracing::instrument;

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/analytics/dashboard", get(dashboard))
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_accounts: i64,
    pub approved_alumni: i64,
    pub pending_verifications: i64,
    pub active_jobs: i64,
    pub pending_mentorships: i64,
    pub active_mentorships: i64,
    pub referral_requests: i64,
    pub published_experiences: i64,
}

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    if !caller.is_admin() {
        return Err(ApiError::forbidden("Not authorized to view analytics"));
    }

    let stats = sqlx::query_as::<_, DashboardStats>(
        r#"
        SELECT
            (SELECT count(*) FROM accounts) AS total_accounts,
            (SELECT count(*) FROM alumni_profiles
              WHERE verification_status = 'approved') AS approved_alumni,
            (SELECT count(*) FROM alumni_profiles
              WHERE verification_status = 'pending') AS pending_verifications,
            (SELECT count(*) FROM jobs WHERE is_active) AS active_jobs,
            (SELECT count(*) FROM mentorships WHERE status = 'pending') AS pending_mentorships,
            (SELECT count(*) FROM mentorships WHERE status = 'accepted') AS active_mentorships,
            (SELECT count(*) FROM referrals) AS referral_requests,
            (SELECT count(*) FROM interview_experiences WHERE is_approved) AS published_experiences
        "#,
    )
    .fetch_one(&state.db)
    .await?;

    Ok(ApiResponse::data(stats))
}
