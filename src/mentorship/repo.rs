use sqlx::PgPool;
use uuid::Uuid;

use crate::mentorship::dto::{CreateMentorshipRequest, UpdateMentorshipRequest};
use crate::mentorship::repo_types::MentorshipRow;
use crate::policy::MentorshipStatus;

const SELECT_JOINED: &str = r#"
    SELECT m.id, m.mentor_id, m.mentee_id, m.status, m.title, m.description,
           m.areas, m.duration, m.meeting_schedule, m.notes,
           m.start_date, m.end_date, m.created_at, m.updated_at,
           mr.first_name AS mentor_first_name,
           mr.last_name AS mentor_last_name,
           mr.email AS mentor_email,
           me.first_name AS mentee_first_name,
           me.last_name AS mentee_last_name,
           me.email AS mentee_email
    FROM mentorships m
    JOIN accounts mr ON mr.id = m.mentor_id
    JOIN accounts me ON me.id = m.mentee_id
"#;

// Non-admin callers only ever see requests they are part of ($1 carries the
// caller id in that case, NULL for admins).
const LIST_WHERE: &str = r#"
    WHERE ($1::uuid IS NULL OR m.mentor_id = $1 OR m.mentee_id = $1)
      AND ($2::mentorship_status IS NULL OR m.status = $2)
"#;

pub async fn list(
    db: &PgPool,
    involving: Option<Uuid>,
    status: Option<MentorshipStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<MentorshipRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} {LIST_WHERE} ORDER BY m.created_at DESC LIMIT $3 OFFSET $4");
    sqlx::query_as::<_, MentorshipRow>(&sql)
        .bind(involving)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
}

pub async fn count(
    db: &PgPool,
    involving: Option<Uuid>,
    status: Option<MentorshipStatus>,
) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT count(*) FROM mentorships m {LIST_WHERE}");
    sqlx::query_scalar::<_, i64>(&sql)
        .bind(involving)
        .bind(status)
        .fetch_one(db)
        .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<MentorshipRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE m.id = $1");
    sqlx::query_as::<_, MentorshipRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn list_by_mentee(db: &PgPool, mentee: Uuid) -> Result<Vec<MentorshipRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE m.mentee_id = $1 ORDER BY m.created_at DESC");
    sqlx::query_as::<_, MentorshipRow>(&sql)
        .bind(mentee)
        .fetch_all(db)
        .await
}

pub async fn list_by_mentor(db: &PgPool, mentor: Uuid) -> Result<Vec<MentorshipRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE m.mentor_id = $1 ORDER BY m.created_at DESC");
    sqlx::query_as::<_, MentorshipRow>(&sql)
        .bind(mentor)
        .fetch_all(db)
        .await
}

/// Inserts a pending request. The partial unique index over live
/// (pending/accepted) pairs turns a duplicate into a unique violation, so
/// two racing submissions cannot both land.
pub async fn create(
    db: &PgPool,
    mentee: Uuid,
    payload: &CreateMentorshipRequest,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO mentorships
            (mentor_id, mentee_id, title, description, areas, duration,
             meeting_schedule, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(payload.mentor)
    .bind(mentee)
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.areas)
    .bind(&payload.duration)
    .bind(&payload.meeting_schedule)
    .bind(&payload.notes)
    .fetch_one(db)
    .await
}

/// Applies an update; acceptance stamps the start date and completion the
/// end date in the same statement.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    changes: &UpdateMentorshipRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE mentorships SET
            status = COALESCE($2, status),
            duration = COALESCE($3, duration),
            meeting_schedule = COALESCE($4, meeting_schedule),
            notes = COALESCE($5, notes),
            start_date = CASE WHEN $2 = 'accepted'::mentorship_status
                              THEN now() ELSE start_date END,
            end_date = CASE WHEN $2 = 'completed'::mentorship_status
                            THEN now() ELSE end_date END,
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(changes.status)
    .bind(&changes.duration)
    .bind(&changes.meeting_schedule)
    .bind(&changes.notes)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM mentorships WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}
