use sqlx::PgPool;
use uuid::Uuid;

use crate::interviews::dto::{CreateInterviewRequest, InterviewListParams, UpdateInterviewRequest};
use crate::interviews::repo_types::InterviewRow;

const SELECT_JOINED: &str = r#"
    SELECT e.id, e.author_id, e.company, e.role, e.domain, e.difficulty,
           e.experience_date, e.rounds, e.technical_topics,
           e.behavioral_questions, e.tips, e.outcome,
           e.salary_min, e.salary_max, e.salary_currency,
           e.is_approved, e.approved_by, e.likes, e.views,
           e.created_at, e.updated_at,
           u.first_name AS author_first_name,
           u.last_name AS author_last_name,
           u.email AS author_email
    FROM interview_experiences e
    JOIN accounts u ON u.id = e.author_id
"#;

// Public feed carries moderated entries only.
const LIST_WHERE: &str = r#"
    WHERE e.is_approved
      AND ($1::text IS NULL OR e.company ILIKE '%' || $1 || '%')
      AND ($2::interview_difficulty IS NULL OR e.difficulty = $2)
"#;

pub async fn list_approved(
    db: &PgPool,
    params: &InterviewListParams,
    limit: i64,
    offset: i64,
) -> Result<Vec<InterviewRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} {LIST_WHERE} ORDER BY e.created_at DESC LIMIT $3 OFFSET $4");
    sqlx::query_as::<_, InterviewRow>(&sql)
        .bind(&params.company)
        .bind(params.difficulty)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
}

pub async fn count_approved(
    db: &PgPool,
    params: &InterviewListParams,
) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT count(*) FROM interview_experiences e {LIST_WHERE}");
    sqlx::query_scalar::<_, i64>(&sql)
        .bind(&params.company)
        .bind(params.difficulty)
        .fetch_one(db)
        .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<InterviewRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE e.id = $1");
    sqlx::query_as::<_, InterviewRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Bumps the view counter and reports the new value.
pub async fn record_view(db: &PgPool, id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "UPDATE interview_experiences SET views = views + 1 WHERE id = $1 RETURNING views",
    )
    .bind(id)
    .fetch_one(db)
    .await
}

pub async fn create(
    db: &PgPool,
    author: Uuid,
    payload: &CreateInterviewRequest,
) -> Result<Uuid, sqlx::Error> {
    let (salary_min, salary_max, salary_currency) = match &payload.salary_range {
        Some(s) => (Some(s.min), Some(s.max), Some(s.currency.clone())),
        None => (None, None, None),
    };
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO interview_experiences
            (author_id, company, role, domain, difficulty, experience_date,
             rounds, technical_topics, behavioral_questions, tips, outcome,
             salary_min, salary_max, salary_currency)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING id
        "#,
    )
    .bind(author)
    .bind(&payload.company)
    .bind(&payload.role)
    .bind(&payload.domain)
    .bind(payload.difficulty)
    .bind(payload.experience_date)
    .bind(sqlx::types::Json(&payload.rounds))
    .bind(&payload.technical_topics)
    .bind(&payload.behavioral_questions)
    .bind(&payload.tips)
    .bind(payload.outcome)
    .bind(salary_min)
    .bind(salary_max)
    .bind(salary_currency)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    changes: &UpdateInterviewRequest,
) -> Result<(), sqlx::Error> {
    let (salary_min, salary_max, salary_currency) = match &changes.salary_range {
        Some(s) => (Some(s.min), Some(s.max), Some(s.currency.clone())),
        None => (None, None, None),
    };
    let rounds = changes.rounds.as_ref().map(sqlx::types::Json);
    sqlx::query(
        r#"
        UPDATE interview_experiences SET
            company = COALESCE($2, company),
            role = COALESCE($3, role),
            domain = COALESCE($4, domain),
            difficulty = COALESCE($5, difficulty),
            experience_date = COALESCE($6, experience_date),
            rounds = COALESCE($7, rounds),
            technical_topics = COALESCE($8::text[], technical_topics),
            behavioral_questions = COALESCE($9::text[], behavioral_questions),
            tips = COALESCE($10::text[], tips),
            outcome = COALESCE($11, outcome),
            salary_min = COALESCE($12, salary_min),
            salary_max = COALESCE($13, salary_max),
            salary_currency = COALESCE($14, salary_currency),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&changes.company)
    .bind(&changes.role)
    .bind(&changes.domain)
    .bind(changes.difficulty)
    .bind(changes.experience_date)
    .bind(rounds)
    .bind(&changes.technical_topics)
    .bind(&changes.behavioral_questions)
    .bind(&changes.tips)
    .bind(changes.outcome)
    .bind(salary_min)
    .bind(salary_max)
    .bind(salary_currency)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn approve(db: &PgPool, id: Uuid, approver: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE interview_experiences
        SET is_approved = TRUE, approved_by = $2, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(approver)
    .execute(db)
    .await?;
    Ok(())
}

/// Single-statement like toggle; returns the resulting like set so the
/// handler can tell which way it flipped.
pub async fn toggle_like(db: &PgPool, id: Uuid, account: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Vec<Uuid>>(
        r#"
        UPDATE interview_experiences
        SET likes = CASE WHEN likes @> ARRAY[$2]
                         THEN array_remove(likes, $2)
                         ELSE array_append(likes, $2) END,
            updated_at = now()
        WHERE id = $1
        RETURNING likes
        "#,
    )
    .bind(id)
    .bind(account)
    .fetch_one(db)
    .await
}
