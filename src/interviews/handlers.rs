use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::{AuthUser, OptionalAuthUser};
use crate::error::ApiError;
use crate::interviews::dto::{CreateInterviewRequest, InterviewListParams, InterviewResponse,
                             LikeResponse, UpdateInterviewRequest};
use crate::interviews::repo;
use crate::policy;
use crate::response::{offset, ApiResponse, PagedResponse};
use crate::state::AppState;

pub fn interview_routes() -> Router<AppState> {
    Router::new()
        .route("/interviews", get(list_interviews).post(create_interview))
        .route("/interviews/:id", get(get_interview).put(update_interview))
        .route("/interviews/:id/approve", post(approve_interview))
        .route("/interviews/:id/like", post(like_interview))
}

#[instrument(skip(state))]
pub async fn list_interviews(
    State(state): State<AppState>,
    Query(params): Query<InterviewListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = repo::list_approved(
        &state.db,
        &params,
        params.limit,
        offset(params.page, params.limit),
    )
    .await?;
    let total = repo::count_approved(&state.db, &params).await?;

    let data: Vec<InterviewResponse> = rows.into_iter().map(InterviewResponse::from).collect();
    Ok(PagedResponse::new(data, total, params.page, params.limit))
}

#[instrument(skip(state))]
pub async fn get_interview(
    State(state): State<AppState>,
    OptionalAuthUser(caller): OptionalAuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let mut row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;

    if !row.is_approved {
        let allowed = caller
            .map(|c| policy::can_edit_experience(&c, row.author_id))
            .unwrap_or(false);
        if !allowed {
            return Err(ApiError::forbidden(
                "This interview experience is awaiting approval",
            ));
        }
    }

    row.views = repo::record_view(&state.db, id).await?;
    Ok(ApiResponse::data(InterviewResponse::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn create_interview(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(payload): Json<CreateInterviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = repo::create(&state.db, caller.account_id, &payload).await?;
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;

    info!(experience_id = %id, author = %caller.account_id, "interview experience shared");
    Ok((
        StatusCode::CREATED,
        ApiResponse::data(InterviewResponse::from(row)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_interview(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;

    if !policy::can_edit_experience(&caller, row.author_id) {
        return Err(ApiError::forbidden(
            "Not authorized to update this interview experience",
        ));
    }

    repo::update(&state.db, id, &payload).await?;
    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;

    Ok(ApiResponse::data(InterviewResponse::from(updated)))
}

#[instrument(skip(state))]
pub async fn approve_interview(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;

    if !policy::can_approve_experience(&caller) {
        return Err(ApiError::forbidden(
            "Not authorized to approve interview experiences",
        ));
    }

    repo::approve(&state.db, id, caller.account_id).await?;
    info!(experience_id = %id, approved_by = %caller.account_id, "interview experience approved");

    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;
    Ok(ApiResponse::data(InterviewResponse::from(updated)))
}

#[instrument(skip(state))]
pub async fn like_interview(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview experience not found"))?;

    let likes = repo::toggle_like(&state.db, id, caller.account_id).await?;
    let liked = likes.contains(&caller.account_id);
    Ok(ApiResponse::data(LikeResponse {
        liked,
        like_count: likes.len(),
    }))
}
