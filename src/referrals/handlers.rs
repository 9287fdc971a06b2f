use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::auth::repo_types::Account;
use crate::error::ApiError;
use crate::policy::Role;
use crate::referrals::dto::{CreateReferralRequest, ReferralResponse, UpdateReferralRequest};
use crate::referrals::repo;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

pub fn referral_routes() -> Router<AppState> {
    Router::new()
        .route("/referrals", get(list_referrals).post(create_referral))
        .route("/referrals/:id", put(update_referral))
}

#[instrument(skip(state))]
pub async fn list_referrals(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let involving = if caller.is_admin() {
        None
    } else {
        Some(caller.account_id)
    };

    let rows = repo::list(&state.db, involving).await?;
    let data: Vec<ReferralResponse> = rows.into_iter().map(ReferralResponse::from).collect();
    Ok(ListResponse::new(data))
}

#[instrument(skip(state, payload))]
pub async fn create_referral(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(payload): Json<CreateReferralRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.requested_to == caller.account_id {
        return Err(ApiError::invalid(
            "You cannot request a referral from yourself",
        ));
    }

    let target = Account::find_by_id(&state.db, payload.requested_to)
        .await?
        .ok_or_else(|| ApiError::not_found("Referral target not found"))?;
    if target.role != Role::Alumni {
        return Err(ApiError::invalid(
            "Referrals can only be requested from alumni",
        ));
    }

    let id = repo::create(&state.db, caller.account_id, &payload).await?;
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Referral not found"))?;

    info!(referral_id = %id, requested_by = %caller.account_id, requested_to = %payload.requested_to, "referral requested");
    Ok((
        StatusCode::CREATED,
        ApiResponse::data(ReferralResponse::from(row)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_referral(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReferralRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Referral not found"))?;

    // Only the person asked for the referral (or an admin) decides.
    if caller.account_id != row.requested_to && !caller.is_admin() {
        return Err(ApiError::forbidden("Not authorized to update this referral"));
    }

    repo::update(&state.db, id, &payload).await?;
    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Referral not found"))?;

    info!(referral_id = %id, status = ?payload.status, "referral status set");
    Ok(ApiResponse::data(ReferralResponse::from(updated)))
}
