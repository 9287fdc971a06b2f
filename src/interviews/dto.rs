use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::UserSummary;
use crate::interviews::repo_types::{Difficulty, InterviewOutcome, InterviewRound, InterviewRow};
use crate::jobs::dto::SalaryRange;
use crate::response::{default_limit, default_page};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewListParams {
    pub company: Option<String>,
    pub difficulty: Option<Difficulty>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub company: String,
    pub role: String,
    pub domain: String,
    pub difficulty: Difficulty,
    #[serde(with = "time::serde::rfc3339")]
    pub experience_date: OffsetDateTime,
    #[serde(default)]
    pub rounds: Vec<InterviewRound>,
    #[serde(default)]
    pub technical_topics: Vec<String>,
    #[serde(default)]
    pub behavioral_questions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    pub outcome: InterviewOutcome,
    pub salary_range: Option<SalaryRange>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewRequest {
    pub company: Option<String>,
    pub role: Option<String>,
    pub domain: Option<String>,
    pub difficulty: Option<Difficulty>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub experience_date: Option<OffsetDateTime>,
    pub rounds: Option<Vec<InterviewRound>>,
    pub technical_topics: Option<Vec<String>>,
    pub behavioral_questions: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    pub outcome: Option<InterviewOutcome>,
    pub salary_range: Option<SalaryRange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub id: Uuid,
    pub author: UserSummary,
    pub company: String,
    pub role: String,
    pub domain: String,
    pub difficulty: Difficulty,
    #[serde(with = "time::serde::rfc3339")]
    pub experience_date: OffsetDateTime,
    pub rounds: Vec<InterviewRound>,
    pub technical_topics: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub tips: Vec<String>,
    pub outcome: InterviewOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    pub is_approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<Uuid>,
    pub likes: Vec<Uuid>,
    pub views: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: usize,
}

impl From<InterviewRow> for InterviewResponse {
    fn from(row: InterviewRow) -> Self {
        let salary_range = match (row.salary_min, row.salary_max) {
            (Some(min), Some(max)) => Some(SalaryRange {
                min,
                max,
                currency: row.salary_currency.unwrap_or_else(|| "USD".into()),
            }),
            _ => None,
        };
        Self {
            id: row.id,
            author: UserSummary {
                id: row.author_id,
                first_name: row.author_first_name,
                last_name: row.author_last_name,
                email: row.author_email,
            },
            company: row.company,
            role: row.role,
            domain: row.domain,
            difficulty: row.difficulty,
            experience_date: row.experience_date,
            rounds: row.rounds.0,
            technical_topics: row.technical_topics,
            behavioral_questions: row.behavioral_questions,
            tips: row.tips,
            outcome: row.outcome,
            salary_range,
            is_approved: row.is_approved,
            approved_by: row.approved_by,
            likes: row.likes,
            views: row.views,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
