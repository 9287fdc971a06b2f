use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::auth::repo_types::Account;
use crate::error::ApiError;
use crate::mentorship::dto::{CreateMentorshipRequest, MentorshipListParams, MentorshipResponse,
                             UpdateMentorshipRequest};
use crate::mentorship::repo;
use crate::policy;
use crate::response::{offset, ApiResponse, ListResponse, PagedResponse};
use crate::state::AppState;

pub fn mentorship_routes() -> Router<AppState> {
    Router::new()
        .route("/mentorship", get(list_mentorships).post(create_mentorship))
        .route("/mentorship/my-requests", get(my_requests))
        .route("/mentorship/requests-to-me", get(requests_to_me))
        .route(
            "/mentorship/:id",
            get(get_mentorship)
                .put(update_mentorship)
                .delete(delete_mentorship),
        )
}

#[instrument(skip(state))]
pub async fn list_mentorships(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Query(params): Query<MentorshipListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let involving = if caller.is_admin() {
        None
    } else {
        Some(caller.account_id)
    };

    let rows = repo::list(
        &state.db,
        involving,
        params.status,
        params.limit,
        offset(params.page, params.limit),
    )
    .await?;
    let total = repo::count(&state.db, involving, params.status).await?;

    let data: Vec<MentorshipResponse> = rows.into_iter().map(MentorshipResponse::from).collect();
    Ok(PagedResponse::new(data, total, params.page, params.limit))
}

#[instrument(skip(state))]
pub async fn get_mentorship(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Mentorship not found"))?;

    if !policy::can_view_mentorship(&caller, row.mentor_id, row.mentee_id) {
        return Err(ApiError::forbidden(
            "Not authorized to view this mentorship",
        ));
    }

    Ok(ApiResponse::data(MentorshipResponse::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn create_mentorship(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(payload): Json<CreateMentorshipRequest>,
) -> Result<impl IntoResponse, ApiError> {
    policy::check_new_mentorship(caller.account_id, payload.mentor)?;

    Account::find_by_id(&state.db, payload.mentor)
        .await?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    let id = repo::create(&state.db, caller.account_id, &payload)
        .await
        .map_err(|e| {
            ApiError::conflict_on_unique(
                e,
                "You already have a pending or active mentorship request with this mentor",
            )
        })?;

    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Mentorship not found"))?;

    info!(mentorship_id = %id, mentor = %payload.mentor, mentee = %caller.account_id, "mentorship requested");
    Ok((
        StatusCode::CREATED,
        ApiResponse::data(MentorshipResponse::from(row)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_mentorship(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMentorshipRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Mentorship not found"))?;

    if !policy::can_view_mentorship(&caller, row.mentor_id, row.mentee_id) {
        return Err(ApiError::forbidden(
            "Not authorized to update this mentorship",
        ));
    }

    if let Some(requested) = payload.status {
        policy::check_status_change(&caller, row.mentor_id, row.mentee_id, row.status, requested)?;
        info!(mentorship_id = %id, from = row.status.as_str(), to = requested.as_str(), "mentorship status change");
    }

    repo::update(&state.db, id, &payload).await?;
    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Mentorship not found"))?;

    Ok(ApiResponse::data(MentorshipResponse::from(updated)))
}

#[instrument(skip(state))]
pub async fn delete_mentorship(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Mentorship not found"))?;

    if !policy::can_delete_mentorship(&caller, row.mentee_id) {
        return Err(ApiError::forbidden(
            "Not authorized to delete this mentorship",
        ));
    }

    repo::delete(&state.db, id).await?;
    info!(mentorship_id = %id, deleted_by = %caller.account_id, "mentorship deleted");
    Ok(ApiResponse::message("Mentorship request deleted successfully"))
}

/// Requests the caller created (as mentee).
#[instrument(skip(state))]
pub async fn my_requests(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let rows = repo::list_by_mentee(&state.db, caller.account_id).await?;
    let data: Vec<MentorshipResponse> = rows.into_iter().map(MentorshipResponse::from).collect();
    Ok(ListResponse::new(data))
}

/// Requests naming the caller as mentor.
#[instrument(skip(state))]
pub async fn requests_to_me(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let rows = repo::list_by_mentor(&state.db, caller.account_id).await?;
    let data: Vec<MentorshipResponse> = rows.into_iter().map(MentorshipResponse::from).collect();
    Ok(ListResponse::new(data))
}
