//! Student profiles. Created alongside the account at registration; they
//! have no routes of their own.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::auth::dto::StudentRegistration;

pub async fn create_profile(
    conn: &mut PgConnection,
    account_id: Uuid,
    data: &StudentRegistration,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO student_profiles
            (account_id, student_id, current_year, department, degree,
             expected_graduation, interests, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(account_id)
    .bind(&data.student_id)
    .bind(data.current_year)
    .bind(&data.department)
    .bind(&data.degree)
    .bind(data.expected_graduation)
    .bind(&data.interests)
    .bind(&data.skills)
    .fetch_one(conn)
    .await
}
