use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "referral_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReferralStatus {
    Pending,
    Approved,
    Declined,
    GuidanceGiven,
}

/// Referral request joined with requester and target accounts.
#[derive(Debug, Clone, FromRow)]
pub struct ReferralRow {
    pub id: Uuid,
    pub requested_by: Uuid,
    pub requested_to: Uuid,
    pub company: String,
    pub position: String,
    pub message: String,
    pub status: ReferralStatus,
    pub guidance_note: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub requester_first_name: String,
    pub requester_last_name: String,
    pub requester_email: String,
    pub target_first_name: String,
    pub target_last_name: String,
    pub target_email: String,
}
