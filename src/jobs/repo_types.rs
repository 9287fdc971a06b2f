use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "work_mode", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
}

/// Job posting joined with the posting account.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub posted_by: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub work_mode: WorkMode,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub application_deadline: Option<OffsetDateTime>,
    pub application_url: Option<String>,
    pub is_active: bool,
    pub applicants: Vec<Uuid>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub poster_first_name: String,
    pub poster_last_name: String,
    pub poster_email: String,
}
