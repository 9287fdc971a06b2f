use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo_types::Account;
use crate::policy::Role;

/// Request body for registration. The role decides which profile payload
/// must accompany it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub alumni_data: Option<AlumniRegistration>,
    pub student_data: Option<StudentRegistration>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniRegistration {
    pub graduation_year: i32,
    pub department: String,
    pub degree: String,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    pub student_id: String,
    pub current_year: i32,
    pub department: String,
    pub degree: String,
    pub expected_graduation: i32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login: `{success, token, user}`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: PublicUser,
}

/// Public part of an account returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_verified: bool,
}

impl From<Account> for PublicUser {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            role: account.role,
            is_verified: account.is_verified,
        }
    }
}

/// Referenced-account slice embedded in other resources, the read-side
/// replacement for join-on-read population.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
