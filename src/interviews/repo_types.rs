use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_outcome", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewOutcome {
    Selected,
    Rejected,
    Ongoing,
}

/// A single interview round, stored as part of the JSONB rounds column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRound {
    pub round_number: i32,
    pub round_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Interview experience joined with its author account.
#[derive(Debug, Clone, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub company: String,
    pub role: String,
    pub domain: String,
    pub difficulty: Difficulty,
    pub experience_date: OffsetDateTime,
    pub rounds: sqlx::types::Json<Vec<InterviewRound>>,
    pub technical_topics: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub tips: Vec<String>,
    pub outcome: InterviewOutcome,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub is_approved: bool,
    pub approved_by: Option<Uuid>,
    pub likes: Vec<Uuid>,
    pub views: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub author_first_name: String,
    pub author_last_name: String,
    pub author_email: String,
}
