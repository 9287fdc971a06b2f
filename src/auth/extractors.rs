use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::repo_types::Account;
use crate::auth::services::JwtKeys;
use crate::error::ApiError;
use crate::policy::Caller;
use crate::state::AppState;

/// Extracts the bearer token, validates it and re-loads the account so a
/// token for a deleted account is rejected. Yields the resolved caller.
pub struct AuthUser(pub Caller);

/// Like [`AuthUser`] but tolerant: `None` when no usable credentials are
/// present. Used by public endpoints that reveal more to involved parties.
pub struct OptionalAuthUser(pub Option<Caller>);

async fn resolve(parts: &mut Parts, state: &AppState) -> Result<Caller, ApiError> {
    let auth = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthenticated("Missing Authorization header"))?;

    let token = auth
        .strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .ok_or_else(|| ApiError::unauthenticated("Invalid auth scheme"))?;

    let keys = JwtKeys::from_ref(state);
    let claims = keys.verify(token).map_err(|_| {
        warn!("invalid or expired token");
        ApiError::unauthenticated("Invalid or expired token")
    })?;

    let account = Account::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("Account no longer exists"))?;

    Ok(Caller {
        account_id: account.id,
        role: account.role,
    })
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await.map(AuthUser)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(resolve(parts, state).await.ok()))
    }
}
