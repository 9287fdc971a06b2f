use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::alumni::repo_types::{AlumniRow, VerificationStatus};
use crate::auth::dto::UserSummary;
use crate::response::{default_limit, default_page};

/// Query parameters for the public directory listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniListParams {
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub industry: Option<String>,
    pub is_available_for_mentorship: Option<bool>,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Partial profile update; absent fields keep their stored value.
/// Verification status is deliberately not updatable here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlumniRequest {
    pub graduation_year: Option<i32>,
    pub department: Option<String>,
    pub degree: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub is_available_for_mentorship: Option<bool>,
    pub mentorship_areas: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAlumniRequest {
    pub verification_status: VerificationStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniResponse {
    pub id: Uuid,
    pub user: UserSummary,
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
    pub is_available_for_mentorship: bool,
    pub mentorship_areas: Vec<String>,
    pub achievements: Vec<String>,
    pub verification_status: VerificationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<AlumniRow> for AlumniResponse {
    fn from(row: AlumniRow) -> Self {
        Self {
            id: row.id,
            user: UserSummary {
                id: row.account_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email: row.owner_email,
            },
            graduation_year: row.graduation_year,
            department: row.department,
            degree: row.degree,
            current_position: row.current_position,
            current_company: row.current_company,
            industry: row.industry,
            location: row.location,
            bio: row.bio,
            skills: row.skills,
            linkedin_url: row.linkedin_url,
            github_url: row.github_url,
            website_url: row.website_url,
            is_available_for_mentorship: row.mentorship_available,
            mentorship_areas: row.mentorship_areas,
            achievements: row.achievements,
            verification_status: row.verification_status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
