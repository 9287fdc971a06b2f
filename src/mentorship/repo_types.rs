use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::policy::MentorshipStatus;

/// Mentorship request joined with both involved accounts.
#[derive(Debug, Clone, FromRow)]
pub struct MentorshipRow {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub status: MentorshipStatus,
    pub title: String,
    pub description: String,
    pub areas: Vec<String>,
    pub duration: Option<String>,
    pub meeting_schedule: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub mentor_first_name: String,
    pub mentor_last_name: String,
    pub mentor_email: String,
    pub mentee_first_name: String,
    pub mentee_last_name: String,
    pub mentee_email: String,
}
