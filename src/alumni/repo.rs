use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::alumni::dto::{AlumniListParams, UpdateAlumniRequest};
use crate::alumni::repo_types::{AlumniRow, VerificationStatus};
use crate::auth::dto::AlumniRegistration;

const SELECT_JOINED: &str = r#"
    SELECT a.id, a.account_id, a.graduation_year, a.department, a.degree,
           a.current_position, a.current_company, a.industry, a.location, a.bio,
           a.skills, a.linkedin_url, a.github_url, a.website_url,
           a.mentorship_available, a.mentorship_areas, a.achievements,
           a.verification_status, a.created_at, a.updated_at,
           u.first_name AS owner_first_name,
           u.last_name AS owner_last_name,
           u.email AS owner_email
    FROM alumni_profiles a
    JOIN accounts u ON u.id = a.account_id
"#;

// Directory invariant: only approved profiles are listed publicly.
const DIRECTORY_WHERE: &str = r#"
    WHERE a.verification_status = 'approved'
      AND ($1::text IS NULL OR a.department = $1)
      AND ($2::int IS NULL OR a.graduation_year = $2)
      AND ($3::text IS NULL OR a.industry = $3)
      AND ($4::bool IS NULL OR a.mentorship_available = $4)
      AND ($5::text IS NULL
           OR u.first_name ILIKE '%' || $5 || '%'
           OR u.last_name ILIKE '%' || $5 || '%')
"#;

/// Availability is a only-filter-when-true toggle, like the original query
/// string handling.
fn availability(params: &AlumniListParams) -> Option<bool> {
    params.is_available_for_mentorship.filter(|v| *v)
}

pub async fn list_directory(
    db: &PgPool,
    params: &AlumniListParams,
    limit: i64,
    offset: i64,
) -> Result<Vec<AlumniRow>, sqlx::Error> {
    let sql =
        format!("{SELECT_JOINED} {DIRECTORY_WHERE} ORDER BY a.created_at DESC LIMIT $6 OFFSET $7");
    sqlx::query_as::<_, AlumniRow>(&sql)
        .bind(&params.department)
        .bind(params.graduation_year)
        .bind(&params.industry)
        .bind(availability(params))
        .bind(&params.search)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
}

pub async fn count_directory(db: &PgPool, params: &AlumniListParams) -> Result<i64, sqlx::Error> {
    let sql = format!(
        "SELECT count(*) FROM alumni_profiles a JOIN accounts u ON u.id = a.account_id {DIRECTORY_WHERE}"
    );
    sqlx::query_scalar::<_, i64>(&sql)
        .bind(&params.department)
        .bind(params.graduation_year)
        .bind(&params.industry)
        .bind(availability(params))
        .bind(&params.search)
        .fetch_one(db)
        .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<AlumniRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE a.id = $1");
    sqlx::query_as::<_, AlumniRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find_by_account(
    db: &PgPool,
    account_id: Uuid,
) -> Result<Option<AlumniRow>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE a.account_id = $1");
    sqlx::query_as::<_, AlumniRow>(&sql)
        .bind(account_id)
        .fetch_optional(db)
        .await
}

/// Inserts the profile created at registration. Runs on the registration
/// transaction.
pub async fn create_profile(
    conn: &mut PgConnection,
    account_id: Uuid,
    data: &AlumniRegistration,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO alumni_profiles
            (account_id, graduation_year, department, degree, current_position,
             current_company, industry, location, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(account_id)
    .bind(data.graduation_year)
    .bind(&data.department)
    .bind(&data.degree)
    .bind(&data.current_position)
    .bind(&data.current_company)
    .bind(&data.industry)
    .bind(&data.location)
    .bind(&data.skills)
    .fetch_one(conn)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    changes: &UpdateAlumniRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE alumni_profiles SET
            graduation_year = COALESCE($2, graduation_year),
            department = COALESCE($3, department),
            degree = COALESCE($4, degree),
            current_position = COALESCE($5, current_position),
            current_company = COALESCE($6, current_company),
            industry = COALESCE($7, industry),
            location = COALESCE($8, location),
            bio = COALESCE($9, bio),
            skills = COALESCE($10::text[], skills),
            linkedin_url = COALESCE($11, linkedin_url),
            github_url = COALESCE($12, github_url),
            website_url = COALESCE($13, website_url),
            mentorship_available = COALESCE($14, mentorship_available),
            mentorship_areas = COALESCE($15::text[], mentorship_areas),
            achievements = COALESCE($16::text[], achievements),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(changes.graduation_year)
    .bind(&changes.department)
    .bind(&changes.degree)
    .bind(&changes.current_position)
    .bind(&changes.current_company)
    .bind(&changes.industry)
    .bind(&changes.location)
    .bind(&changes.bio)
    .bind(&changes.skills)
    .bind(&changes.linkedin_url)
    .bind(&changes.github_url)
    .bind(&changes.website_url)
    .bind(changes.is_available_for_mentorship)
    .bind(&changes.mentorship_areas)
    .bind(&changes.achievements)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn set_verification(
    db: &PgPool,
    id: Uuid,
    status: VerificationStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE alumni_profiles SET verification_status = $2, updated_at = now() WHERE id = $1",
    )
    .bind(id)
    .bind(status)
    .execute(db)
    .await?;
    Ok(())
}
