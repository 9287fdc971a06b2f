use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::alumni;
use crate::auth::{
    dto::{AlumniRegistration, AuthResponse, LoginRequest, PublicUser, RegisterRequest,
          StudentRegistration},
    extractors::AuthUser,
    repo_types::Account,
    services::{hash_password, is_valid_email, verify_password, JwtKeys},
};
use crate::error::ApiError;
use crate::policy::Role;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::students;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

enum ProfileData {
    Alumni(AlumniRegistration),
    Student(StudentRegistration),
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::invalid("Invalid email"));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::invalid("Password too short"));
    }

    // Admin accounts come from the seed tool, never from self-registration.
    let profile = match payload.role {
        Role::Admin => {
            return Err(ApiError::invalid("Admin accounts cannot be self-registered"));
        }
        Role::Alumni => match payload.alumni_data.take() {
            Some(data) => ProfileData::Alumni(data),
            None => {
                return Err(ApiError::invalid(
                    "alumniData is required for alumni registration",
                ));
            }
        },
        Role::Student => match payload.student_data.take() {
            Some(data) => ProfileData::Student(data),
            None => {
                return Err(ApiError::invalid(
                    "studentData is required for student registration",
                ));
            }
        },
    };

    let hash = hash_password(&payload.password)?;

    // Account and role profile land together or not at all.
    let mut tx = state.db.begin().await?;
    let account = Account::create(
        &mut tx,
        &payload.email,
        &hash,
        &payload.first_name,
        &payload.last_name,
        payload.role,
    )
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "User already exists"))?;

    match &profile {
        ProfileData::Alumni(data) => {
            alumni::repo::create_profile(&mut tx, account.id, data).await?;
        }
        ProfileData::Student(data) => {
            students::create_profile(&mut tx, account.id, data)
                .await
                .map_err(|e| ApiError::conflict_on_unique(e, "Student ID already registered"))?;
        }
    }
    tx.commit().await?;

    let token = JwtKeys::from_ref(&state).sign(account.id)?;

    info!(account_id = %account.id, email = %account.email, role = ?account.role, "account registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: PublicUser::from(account),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let account = Account::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::unauthenticated("Invalid credentials")
        })?;

    if !verify_password(&payload.password, &account.password_hash)? {
        warn!(email = %payload.email, account_id = %account.id, "login invalid password");
        return Err(ApiError::unauthenticated("Invalid credentials"));
    }

    let token = JwtKeys::from_ref(&state).sign(account.id)?;

    info!(account_id = %account.id, email = %account.email, "account logged in");
    Ok(Json(AuthResponse {
        success: true,
        token,
        user: PublicUser::from(account),
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let account = Account::find_by_id(&state.db, caller.account_id)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("Account no longer exists"))?;

    Ok(ApiResponse::data(PublicUser::from(account)))
}
