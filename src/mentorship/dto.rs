use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::UserSummary;
use crate::mentorship::repo_types::MentorshipRow;
use crate::policy::MentorshipStatus;
use crate::response::{default_limit, default_page};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipListParams {
    pub status: Option<MentorshipStatus>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Typed command for a new mentorship request; the mentee is always the
/// caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorshipRequest {
    pub mentor: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub areas: Vec<String>,
    pub duration: Option<String>,
    pub meeting_schedule: Option<String>,
    pub notes: Option<String>,
}

/// Status changes ride the state machine; the free-text fields are open to
/// any involved party.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMentorshipRequest {
    pub status: Option<MentorshipStatus>,
    pub duration: Option<String>,
    pub meeting_schedule: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipResponse {
    pub id: Uuid,
    pub mentor: UserSummary,
    pub mentee: UserSummary,
    pub status: MentorshipStatus,
    pub title: String,
    pub description: String,
    pub areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<MentorshipRow> for MentorshipResponse {
    fn from(row: MentorshipRow) -> Self {
        Self {
            id: row.id,
            mentor: UserSummary {
                id: row.mentor_id,
                first_name: row.mentor_first_name,
                last_name: row.mentor_last_name,
                email: row.mentor_email,
            },
            mentee: UserSummary {
                id: row.mentee_id,
                first_name: row.mentee_first_name,
                last_name: row.mentee_last_name,
                email: row.mentee_email,
            },
            status: row.status,
            title: row.title,
            description: row.description,
            areas: row.areas,
            duration: row.duration,
            meeting_schedule: row.meeting_schedule,
            notes: row.notes,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
