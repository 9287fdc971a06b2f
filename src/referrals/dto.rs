use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::UserSummary;
use crate::referrals::repo_types::{ReferralRow, ReferralStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferralRequest {
    pub requested_to: Uuid,
    pub company: String,
    pub position: String,
    pub message: String,
}

/// Target-side decision on a referral request. A guidance note may ride
/// along with any decision, typically `guidance-given`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReferralRequest {
    pub status: ReferralStatus,
    pub guidance_note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralResponse {
    pub id: Uuid,
    pub requested_by: UserSummary,
    pub requested_to: UserSummary,
    pub company: String,
    pub position: String,
    pub message: String,
    pub status: ReferralStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<ReferralRow> for ReferralResponse {
    fn from(row: ReferralRow) -> Self {
        Self {
            id: row.id,
            requested_by: UserSummary {
                id: row.requested_by,
                first_name: row.requester_first_name,
                last_name: row.requester_last_name,
                email: row.requester_email,
            },
            requested_to: UserSummary {
                id: row.requested_to,
                first_name: row.target_first_name,
                last_name: row.target_last_name,
                email: row.target_email,
            },
            company: row.company,
            position: row.position,
            message: row.message,
            status: row.status,
            guidance_note: row.guidance_note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_status_uses_kebab_case_labels() {
        let json = serde_json::to_string(&ReferralStatus::GuidanceGiven).unwrap();
        assert_eq!(json, r#""guidance-given""#);
        let back: ReferralStatus = serde_json::from_str(r#""guidance-given""#).unwrap();
        assert_eq!(back, ReferralStatus::GuidanceGiven);
    }
}
