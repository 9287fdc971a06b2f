//! Clears the database and loads demo data. Also the only path that creates
//! admin accounts.

use alumlink::alumni;
use alumlink::auth::dto::{AlumniRegistration, StudentRegistration};
use alumlink::auth::repo_types::Account;
use alumlink::auth::services::hash_password;
use alumlink::jobs;
use alumlink::jobs::dto::{CreateJobRequest, SalaryRange};
use alumlink::jobs::repo_types::{JobType, WorkMode};
use alumlink::mentorship;
use alumlink::mentorship::dto::CreateMentorshipRequest;
use alumlink::policy::Role;
use alumlink::referrals;
use alumlink::referrals::dto::CreateReferralRequest;
use alumlink::state::AppState;
use alumlink::students;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let state = AppState::init().await?;
    sqlx::migrate!("./migrations").run(&state.db).await?;

    let hash = hash_password("password123")?;

    let mut tx = state.db.begin().await?;

    sqlx::query(
        "TRUNCATE interview_experiences, referrals, mentorships, jobs, \
         student_profiles, alumni_profiles, accounts CASCADE",
    )
    .execute(&mut *tx)
    .await?;
    info!("cleared existing data");

    let admin = Account::create(
        &mut tx,
        "admin@alumlink.edu",
        &hash,
        "Ada",
        "Admin",
        Role::Admin,
    )
    .await?;

    let john = Account::create(
        &mut tx,
        "john.doe@alumni.com",
        &hash,
        "John",
        "Doe",
        Role::Alumni,
    )
    .await?;
    let john_profile = alumni::repo::create_profile(
        &mut tx,
        john.id,
        &AlumniRegistration {
            graduation_year: 2020,
            department: "Computer Science".into(),
            degree: "B.Tech".into(),
            current_position: Some("Senior Software Engineer".into()),
            current_company: Some("Google".into()),
            industry: Some("Technology".into()),
            location: Some("San Francisco, CA".into()),
            skills: vec!["Python".into(), "AWS".into(), "Kubernetes".into()],
        },
    )
    .await?;

    let sarah = Account::create(
        &mut tx,
        "sarah.smith@alumni.com",
        &hash,
        "Sarah",
        "Smith",
        Role::Alumni,
    )
    .await?;
    let sarah_profile = alumni::repo::create_profile(
        &mut tx,
        sarah.id,
        &AlumniRegistration {
            graduation_year: 2019,
            department: "Data Science".into(),
            degree: "M.Tech".into(),
            current_position: Some("ML Engineer".into()),
            current_company: Some("Microsoft".into()),
            industry: Some("Technology".into()),
            location: Some("Seattle, WA".into()),
            skills: vec!["Python".into(), "TensorFlow".into(), "NLP".into()],
        },
    )
    .await?;

    let alice = Account::create(
        &mut tx,
        "alice.brown@student.com",
        &hash,
        "Alice",
        "Brown",
        Role::Student,
    )
    .await?;
    students::create_profile(
        &mut tx,
        alice.id,
        &StudentRegistration {
            student_id: "STU-2023-001".into(),
            current_year: 3,
            department: "Computer Science".into(),
            degree: "B.Tech".into(),
            expected_graduation: 2026,
            interests: vec!["Backend Development".into(), "Cloud Computing".into()],
            skills: vec!["Rust".into(), "SQL".into()],
        },
    )
    .await?;

    // Seeded accounts arrive verified, seeded alumni pre-approved.
    sqlx::query("UPDATE accounts SET is_verified = TRUE")
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE alumni_profiles SET verification_status = 'approved', mentorship_available = TRUE")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(admin = %admin.id, alumni = 2, students = 1, "accounts seeded");

    let job_id = jobs::repo::create(
        &state.db,
        john.id,
        &CreateJobRequest {
            title: "Backend Engineer".into(),
            company: "Google".into(),
            location: "San Francisco, CA".into(),
            job_type: JobType::FullTime,
            work_mode: WorkMode::Hybrid,
            description: "Work on large-scale distributed systems.".into(),
            requirements: vec!["3+ years backend experience".into()],
            skills: vec!["Go".into(), "Kubernetes".into()],
            salary: Some(SalaryRange {
                min: 150_000,
                max: 220_000,
                currency: "USD".into(),
            }),
            application_deadline: None,
            application_url: None,
        },
    )
    .await?;
    info!(%job_id, "job seeded");

    let mentorship_id = mentorship::repo::create(
        &state.db,
        alice.id,
        &CreateMentorshipRequest {
            mentor: john.id,
            title: "Backend career guidance".into(),
            description: "Looking for guidance on breaking into backend engineering.".into(),
            areas: vec!["Backend Development".into(), "Career Guidance".into()],
            duration: Some("3 months".into()),
            meeting_schedule: Some("Bi-weekly".into()),
            notes: None,
        },
    )
    .await?;
    info!(%mentorship_id, "mentorship seeded");

    let referral_id = referrals::repo::create(
        &state.db,
        alice.id,
        &CreateReferralRequest {
            requested_to: sarah.id,
            company: "Microsoft".into(),
            position: "SDE Intern".into(),
            message: "I would love a referral for the summer internship.".into(),
        },
    )
    .await?;
    info!(%referral_id, "referral seeded");

    info!(
        john_profile = %john_profile,
        sarah_profile = %sarah_profile,
        "seed complete"
    );
    Ok(())
}
