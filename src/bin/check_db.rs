//! Quick sanity check: prints table counts and the alumni directory.

use alumlink::alumni;
use alumlink::alumni::dto::AlumniListParams;
use alumlink::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let state = AppState::init().await?;

    for table in [
        "accounts",
        "alumni_profiles",
        "student_profiles",
        "jobs",
        "mentorships",
        "referrals",
        "interview_experiences",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT count(*) FROM {table}"))
            .fetch_one(&state.db)
            .await?;
        println!("{table}: {count}");
    }

    let params = AlumniListParams {
        department: None,
        graduation_year: None,
        industry: None,
        is_available_for_mentorship: None,
        search: None,
        page: 1,
        limit: 50,
    };
    let directory = alumni::repo::list_directory(&state.db, &params, params.limit, 0).await?;

    if directory.is_empty() {
        println!("no approved alumni found");
    } else {
        println!("approved alumni:");
        for (i, row) in directory.iter().enumerate() {
            println!(
                "{}. {} {} - {} at {}",
                i + 1,
                row.owner_first_name,
                row.owner_last_name,
                row.current_position.as_deref().unwrap_or("-"),
                row.current_company.as_deref().unwrap_or("-"),
            );
        }
    }

    Ok(())
}
