use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::policy::Role;

/// Account record. The role is fixed at registration and never updated.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
