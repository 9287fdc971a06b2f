use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::alumni::dto::{AlumniListParams, AlumniResponse, UpdateAlumniRequest,
                         VerifyAlumniRequest};
use crate::alumni::repo;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::policy::{self, Role};
use crate::response::{offset, ApiResponse, PagedResponse};
use crate::state::AppState;

pub fn alumni_routes() -> Router<AppState> {
    Router::new()
        .route("/alumni", get(list_alumni))
        .route("/alumni/me", get(get_my_profile))
        .route("/alumni/:id", get(get_alumni).put(update_alumni))
        .route("/alumni/:id/verify", post(verify_alumni))
}

/// Public directory: approved profiles only, filterable and paginated.
#[instrument(skip(state))]
pub async fn list_alumni(
    State(state): State<AppState>,
    Query(params): Query<AlumniListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = repo::list_directory(
        &state.db,
        &params,
        params.limit,
        offset(params.page, params.limit),
    )
    .await?;
    let total = repo::count_directory(&state.db, &params).await?;

    let data: Vec<AlumniResponse> = rows.into_iter().map(AlumniResponse::from).collect();
    Ok(PagedResponse::new(data, total, params.page, params.limit))
}

#[instrument(skip(state))]
pub async fn get_alumni(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Alumni not found"))?;
    Ok(ApiResponse::data(AlumniResponse::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_alumni(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAlumniRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Alumni not found"))?;

    if !policy::can_edit_profile(&caller, row.account_id) {
        return Err(ApiError::forbidden("Not authorized to update this profile"));
    }

    repo::update(&state.db, id, &payload).await?;
    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Alumni not found"))?;

    Ok(ApiResponse::data(AlumniResponse::from(updated)))
}

#[instrument(skip(state, payload))]
pub async fn verify_alumni(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<VerifyAlumniRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Alumni not found"))?;

    if !policy::can_verify_alumni(&caller) {
        return Err(ApiError::forbidden(
            "Not authorized to verify alumni profiles",
        ));
    }

    repo::set_verification(&state.db, id, payload.verification_status).await?;
    info!(profile_id = %row.id, status = ?payload.verification_status, "verification status set");

    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Alumni not found"))?;
    Ok(ApiResponse::data(AlumniResponse::from(updated)))
}

#[instrument(skip(state))]
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    if caller.role != Role::Alumni {
        return Err(ApiError::forbidden("Only alumni have an alumni profile"));
    }

    let row = repo::find_by_account(&state.db, caller.account_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Alumni profile not found"))?;
    Ok(ApiResponse::data(AlumniResponse::from(row)))
}
