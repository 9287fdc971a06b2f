use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "verification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Alumni profile joined with its owning account (the read-side join that
/// replaces population).
#[derive(Debug, Clone, FromRow)]
pub struct AlumniRow {
    pub id: Uuid,
    pub account_id: Uuid,
    pub graduation_year: i32,
    pub department: String,
    pub degree: String,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub mentorship_available: bool,
    pub mentorship_areas: Vec<String>,
    pub achievements: Vec<String>,
    pub verification_status: VerificationStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email: String,
}
