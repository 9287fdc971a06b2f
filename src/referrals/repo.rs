use sqlx::PgPool;
use uuid::Uuid;

use crate::referrals::dto::{CreateReferralRequest, UpdateReferralRequest};
use crate::referrals::repo_types::ReferralRow;

const SELECT_JOINED: &str = r#"
    SELECT r.id, r.requested_by, r.requested_to, r.company, r.position,
           r.message, r.status, r.guidance_note, r.created_at, r.updated_at,
           rb.first_name AS requester_first_name,
           rb.last_name AS requester_last_name,
           rb.email AS requester_email,
           rt.first_name AS target_first_name,
           rt.last_name AS target_last_name,
           rt.email AS target_email
    FROM referrals r
    JOIN accounts rb ON rb.id = r.requested_by
    JOIN accounts rt ON rt.id = r.requested_to
"#;

pub async fn list(db: &PgPool, involving: Option<Uuid>) -> Result<Vec<ReferralRow>, sqlx::Error> {
    let sql = format!(
        r#"{SELECT_JOINED}
        WHERE ($1::uuid IS NULL OR r.requested_by = $1 OR r.requested_to = $1)
        ORDER BY r.created_at DESC"#
    );
    sqlx::query_as::<_, ReferralRow>(&sql)
        .bind(involving)
        .fetch_all(db)
        .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<ReferralRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE r.id = $1");
    sqlx::query_as::<_, ReferralRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(
    db: &PgPool,
    requested_by: Uuid,
    payload: &CreateReferralRequest,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO referrals (requested_by, requested_to, company, position, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(requested_by)
    .bind(payload.requested_to)
    .bind(&payload.company)
    .bind(&payload.position)
    .bind(&payload.message)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    changes: &UpdateReferralRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE referrals SET
            status = $2,
            guidance_note = COALESCE($3, guidance_note),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(changes.status)
    .bind(&changes.guidance_note)
    .execute(db)
    .await?;
    Ok(())
}
