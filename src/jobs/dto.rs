use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::UserSummary;
use crate::jobs::repo_types::{JobRow, JobType, WorkMode};
use crate::response::{default_limit, default_page};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".into()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListParams {
    pub job_type: Option<JobType>,
    pub work_mode: Option<WorkMode>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub work_mode: WorkMode,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub salary: Option<SalaryRange>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    pub application_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub work_mode: Option<WorkMode>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub salary: Option<SalaryRange>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    pub application_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: Uuid,
    pub posted_by: UserSummary,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub work_mode: WorkMode,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    #[serde(skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    pub is_active: bool,
    pub applicants: Vec<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<JobRow> for JobResponse {
    fn from(row: JobRow) -> Self {
        let salary = match (row.salary_min, row.salary_max) {
            (Some(min), Some(max)) => Some(SalaryRange {
                min,
                max,
                currency: row.salary_currency.unwrap_or_else(default_currency),
            }),
            _ => None,
        };
        Self {
            id: row.id,
            posted_by: UserSummary {
                id: row.posted_by,
                first_name: row.poster_first_name,
                last_name: row.poster_last_name,
                email: row.poster_email,
            },
            title: row.title,
            company: row.company,
            location: row.location,
            job_type: row.job_type,
            work_mode: row.work_mode,
            description: row.description,
            requirements: row.requirements,
            skills: row.skills,
            salary,
            application_deadline: row.application_deadline,
            application_url: row.application_url,
            is_active: row.is_active,
            applicants: row.applicants,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
