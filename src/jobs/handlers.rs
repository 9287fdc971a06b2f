use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::jobs::dto::{CreateJobRequest, JobListParams, JobResponse, UpdateJobRequest};
use crate::jobs::repo;
use crate::policy;
use crate::response::{offset, ApiResponse, ListResponse, PagedResponse};
use crate::state::AppState;

pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/my-jobs", get(my_jobs))
        .route("/jobs/:id", get(get_job).put(update_job).delete(delete_job))
        .route("/jobs/:id/apply", post(apply_to_job))
}

#[instrument(skip(state))]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = repo::list(
        &state.db,
        &params,
        params.limit,
        offset(params.page, params.limit),
    )
    .await?;
    let total = repo::count(&state.db, &params).await?;

    let data: Vec<JobResponse> = rows.into_iter().map(JobResponse::from).collect();
    Ok(PagedResponse::new(data, total, params.page, params.limit))
}

#[instrument(skip(state))]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;
    Ok(ApiResponse::data(JobResponse::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn create_job(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(payload): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !policy::can_create_job(&caller) {
        return Err(ApiError::forbidden("Only alumni and admins can post jobs"));
    }

    let id = repo::create(&state.db, caller.account_id, &payload).await?;
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    info!(job_id = %id, posted_by = %caller.account_id, "job posted");
    Ok((StatusCode::CREATED, ApiResponse::data(JobResponse::from(row))))
}

#[instrument(skip(state, payload))]
pub async fn update_job(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if !policy::can_edit_job(&caller, row.posted_by) {
        return Err(ApiError::forbidden("Not authorized to update this job"));
    }

    repo::update(&state.db, id, &payload).await?;
    let updated = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    Ok(ApiResponse::data(JobResponse::from(updated)))
}

#[instrument(skip(state))]
pub async fn delete_job(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if !policy::can_edit_job(&caller, row.posted_by) {
        return Err(ApiError::forbidden("Not authorized to delete this job"));
    }

    repo::delete(&state.db, id).await?;
    info!(job_id = %id, deleted_by = %caller.account_id, "job deleted");
    Ok(ApiResponse::message("Job deleted successfully"))
}

#[instrument(skip(state))]
pub async fn apply_to_job(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if !repo::apply(&state.db, id, caller.account_id).await? {
        return Err(ApiError::conflict("You have already applied to this job"));
    }

    info!(job_id = %id, applicant = %caller.account_id, "application submitted");
    Ok(ApiResponse::message("Application submitted successfully"))
}

#[instrument(skip(state))]
pub async fn my_jobs(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let rows = repo::list_by_poster(&state.db, caller.account_id).await?;
    let data: Vec<JobResponse> = rows.into_iter().map(JobResponse::from).collect();
    Ok(ListResponse::new(data))
}
