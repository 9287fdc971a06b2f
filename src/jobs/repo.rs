use sqlx::PgPool;
use uuid::Uuid;

use crate::jobs::dto::{CreateJobRequest, JobListParams, UpdateJobRequest};
use crate::jobs::repo_types::JobRow;

const SELECT_JOINED: &str = r#"
    SELECT j.id, j.posted_by, j.title, j.company, j.location, j.job_type,
           j.work_mode, j.description, j.requirements, j.skills,
           j.salary_min, j.salary_max, j.salary_currency,
           j.application_deadline, j.application_url, j.is_active,
           j.applicants, j.created_at, j.updated_at,
           u.first_name AS poster_first_name,
           u.last_name AS poster_last_name,
           u.email AS poster_email
    FROM jobs j
    JOIN accounts u ON u.id = j.posted_by
"#;

const LIST_WHERE: &str = r#"
    WHERE ($1::job_type IS NULL OR j.job_type = $1)
      AND ($2::work_mode IS NULL OR j.work_mode = $2)
      AND ($3::text IS NULL OR j.company ILIKE '%' || $3 || '%')
      AND ($4::text IS NULL OR j.location ILIKE '%' || $4 || '%')
      AND ($5::bool IS NULL OR j.is_active = $5)
"#;

/// `isActive=true` (the default) narrows to active postings; any other
/// value lifts the filter entirely, like the original query handling.
fn active_filter(params: &JobListParams) -> Option<bool> {
    params.is_active.unwrap_or(true).then_some(true)
}

pub async fn list(
    db: &PgPool,
    params: &JobListParams,
    limit: i64,
    offset: i64,
) -> Result<Vec<JobRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} {LIST_WHERE} ORDER BY j.created_at DESC LIMIT $6 OFFSET $7");
    sqlx::query_as::<_, JobRow>(&sql)
        .bind(params.job_type)
        .bind(params.work_mode)
        .bind(&params.company)
        .bind(&params.location)
        .bind(active_filter(params))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
}

pub async fn count(db: &PgPool, params: &JobListParams) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT count(*) FROM jobs j {LIST_WHERE}");
    sqlx::query_scalar::<_, i64>(&sql)
        .bind(params.job_type)
        .bind(params.work_mode)
        .bind(&params.company)
        .bind(&params.location)
        .bind(active_filter(params))
        .fetch_one(db)
        .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE j.id = $1");
    sqlx::query_as::<_, JobRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn list_by_poster(db: &PgPool, posted_by: Uuid) -> Result<Vec<JobRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE j.posted_by = $1 ORDER BY j.created_at DESC");
    sqlx::query_as::<_, JobRow>(&sql)
        .bind(posted_by)
        .fetch_all(db)
        .await
}

pub async fn create(
    db: &PgPool,
    posted_by: Uuid,
    payload: &CreateJobRequest,
) -> Result<Uuid, sqlx::Error> {
    let (salary_min, salary_max, salary_currency) = match &payload.salary {
        Some(s) => (Some(s.min), Some(s.max), Some(s.currency.clone())),
        None => (None, None, None),
    };
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO jobs
            (posted_by, title, company, location, job_type, work_mode, description,
             requirements, skills, salary_min, salary_max, salary_currency,
             application_deadline, application_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING id
        "#,
    )
    .bind(posted_by)
    .bind(&payload.title)
    .bind(&payload.company)
    .bind(&payload.location)
    .bind(payload.job_type)
    .bind(payload.work_mode)
    .bind(&payload.description)
    .bind(&payload.requirements)
    .bind(&payload.skills)
    .bind(salary_min)
    .bind(salary_max)
    .bind(salary_currency)
    .bind(payload.application_deadline)
    .bind(&payload.application_url)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    changes: &UpdateJobRequest,
) -> Result<(), sqlx::Error> {
    let (salary_min, salary_max, salary_currency) = match &changes.salary {
        Some(s) => (Some(s.min), Some(s.max), Some(s.currency.clone())),
        None => (None, None, None),
    };
    sqlx::query(
        r#"
        UPDATE jobs SET
            title = COALESCE($2, title),
            company = COALESCE($3, company),
            location = COALESCE($4, location),
            job_type = COALESCE($5, job_type),
            work_mode = COALESCE($6, work_mode),
            description = COALESCE($7, description),
            requirements = COALESCE($8::text[], requirements),
            skills = COALESCE($9::text[], skills),
            salary_min = COALESCE($10, salary_min),
            salary_max = COALESCE($11, salary_max),
            salary_currency = COALESCE($12, salary_currency),
            application_deadline = COALESCE($13, application_deadline),
            application_url = COALESCE($14, application_url),
            is_active = COALESCE($15, is_active),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&changes.title)
    .bind(&changes.company)
    .bind(&changes.location)
    .bind(changes.job_type)
    .bind(changes.work_mode)
    .bind(&changes.description)
    .bind(&changes.requirements)
    .bind(&changes.skills)
    .bind(salary_min)
    .bind(salary_max)
    .bind(salary_currency)
    .bind(changes.application_deadline)
    .bind(&changes.application_url)
    .bind(changes.is_active)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}

/// Atomic application append: the guard and the write are one statement, so
/// two racing applications cannot both pass the duplicate check. Returns
/// false when the applicant was already present.
pub async fn apply(db: &PgPool, id: Uuid, applicant: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE jobs
        SET applicants = array_append(applicants, $2), updated_at = now()
        WHERE id = $1 AND NOT (applicants @> ARRAY[$2])
        "#,
    )
    .bind(id)
    .bind(applicant)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
