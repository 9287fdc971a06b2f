//! Authorization policy: pure decision functions answering "may this caller
//! perform this action on this resource in its current state?". Handlers
//! check resource existence first, then consult these predicates, and only
//! then touch the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Alumni,
    Admin,
}

/// Resolved identity of an authenticated request.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub account_id: Uuid,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

fn is_owner_or_admin(caller: &Caller, owner: Uuid) -> bool {
    caller.account_id == owner || caller.is_admin()
}

pub fn can_edit_profile(caller: &Caller, profile_owner: Uuid) -> bool {
    is_owner_or_admin(caller, profile_owner)
}

pub fn can_create_job(caller: &Caller) -> bool {
    match caller.role {
        Role::Alumni | Role::Admin => true,
        Role::Student => false,
    }
}

pub fn can_edit_job(caller: &Caller, posted_by: Uuid) -> bool {
    is_owner_or_admin(caller, posted_by)
}

pub fn can_edit_experience(caller: &Caller, author: Uuid) -> bool {
    is_owner_or_admin(caller, author)
}

pub fn can_verify_alumni(caller: &Caller) -> bool {
    caller.is_admin()
}

pub fn can_approve_experience(caller: &Caller) -> bool {
    caller.is_admin()
}

// --- mentorship state machine ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "mentorship_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MentorshipStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl MentorshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }
}

pub fn is_mentorship_participant(caller: &Caller, mentor: Uuid, mentee: Uuid) -> bool {
    caller.account_id == mentor || caller.account_id == mentee
}

pub fn can_view_mentorship(caller: &Caller, mentor: Uuid, mentee: Uuid) -> bool {
    is_mentorship_participant(caller, mentor, mentee) || caller.is_admin()
}

/// Deletion is reserved for the request creator (the mentee) or an admin,
/// in any state.
pub fn can_delete_mentorship(caller: &Caller, mentee: Uuid) -> bool {
    caller.account_id == mentee || caller.is_admin()
}

/// A mentee may not request mentorship from themselves.
pub fn check_new_mentorship(mentee: Uuid, mentor: Uuid) -> Result<(), ApiError> {
    if mentor == mentee {
        return Err(ApiError::invalid(
            "You cannot request mentorship from yourself",
        ));
    }
    Ok(())
}

/// Validates a requested status transition against the lifecycle
/// pending -> accepted | rejected, accepted -> completed.
///
/// Acceptance and rejection belong to the named mentor (or an admin);
/// completion is open to any involved party. Everything else is either
/// `Forbidden` (outsiders) or `InvalidRequest` (transitions outside the
/// state graph).
pub fn check_status_change(
    caller: &Caller,
    mentor: Uuid,
    mentee: Uuid,
    current: MentorshipStatus,
    requested: MentorshipStatus,
) -> Result<(), ApiError> {
    use MentorshipStatus::*;

    if !can_view_mentorship(caller, mentor, mentee) {
        return Err(ApiError::forbidden(
            "Not authorized to update this mentorship",
        ));
    }

    let is_mentor = caller.account_id == mentor;
    match (current, requested) {
        (Pending, Accepted) | (Pending, Rejected) => {
            if is_mentor || caller.is_admin() {
                Ok(())
            } else {
                Err(ApiError::forbidden(
                    "Only the mentor can accept or reject mentorship requests",
                ))
            }
        }
        (Accepted, Completed) => Ok(()),
        (from, to) => Err(ApiError::invalid(format!(
            "Cannot change mentorship status from {} to {}",
            from.as_str(),
            to.as_str()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: Role) -> Caller {
        Caller {
            account_id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn profile_edits_require_ownership_or_admin() {
        let owner = Uuid::new_v4();
        let self_edit = Caller {
            account_id: owner,
            role: Role::Alumni,
        };
        assert!(can_edit_profile(&self_edit, owner));
        assert!(can_edit_profile(&caller(Role::Admin), owner));
        assert!(!can_edit_profile(&caller(Role::Alumni), owner));
        assert!(!can_edit_profile(&caller(Role::Student), owner));
    }

    #[test]
    fn job_creation_is_gated_by_role() {
        assert!(can_create_job(&caller(Role::Alumni)));
        assert!(can_create_job(&caller(Role::Admin)));
        assert!(!can_create_job(&caller(Role::Student)));
    }

    #[test]
    fn job_edits_require_ownership_or_admin() {
        let poster = Uuid::new_v4();
        let owner = Caller {
            account_id: poster,
            role: Role::Alumni,
        };
        assert!(can_edit_job(&owner, poster));
        assert!(can_edit_job(&caller(Role::Admin), poster));
        assert!(!can_edit_job(&caller(Role::Student), poster));
        assert!(!can_edit_job(&caller(Role::Alumni), poster));
    }

    #[test]
    fn verification_is_admin_only() {
        assert!(can_verify_alumni(&caller(Role::Admin)));
        assert!(!can_verify_alumni(&caller(Role::Alumni)));
        assert!(!can_verify_alumni(&caller(Role::Student)));
    }

    #[test]
    fn self_mentorship_is_rejected() {
        let id = Uuid::new_v4();
        assert!(check_new_mentorship(id, id).is_err());
        assert!(check_new_mentorship(id, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn viewing_is_restricted_to_participants_and_admins() {
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let as_mentor = Caller {
            account_id: mentor,
            role: Role::Alumni,
        };
        let as_mentee = Caller {
            account_id: mentee,
            role: Role::Student,
        };
        assert!(can_view_mentorship(&as_mentor, mentor, mentee));
        assert!(can_view_mentorship(&as_mentee, mentor, mentee));
        assert!(can_view_mentorship(&caller(Role::Admin), mentor, mentee));
        assert!(!can_view_mentorship(&caller(Role::Student), mentor, mentee));
    }

    #[test]
    fn deletion_is_reserved_for_mentee_or_admin() {
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let as_mentor = Caller {
            account_id: mentor,
            role: Role::Alumni,
        };
        let as_mentee = Caller {
            account_id: mentee,
            role: Role::Student,
        };
        assert!(can_delete_mentorship(&as_mentee, mentee));
        assert!(can_delete_mentorship(&caller(Role::Admin), mentee));
        assert!(!can_delete_mentorship(&as_mentor, mentee));
    }

    #[test]
    fn only_mentor_or_admin_accepts_and_rejects() {
        use MentorshipStatus::*;
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let as_mentor = Caller {
            account_id: mentor,
            role: Role::Alumni,
        };
        let as_mentee = Caller {
            account_id: mentee,
            role: Role::Student,
        };

        for requested in [Accepted, Rejected] {
            assert!(check_status_change(&as_mentor, mentor, mentee, Pending, requested).is_ok());
            assert!(
                check_status_change(&caller(Role::Admin), mentor, mentee, Pending, requested)
                    .is_ok()
            );
            let err = check_status_change(&as_mentee, mentor, mentee, Pending, requested)
                .unwrap_err();
            assert!(matches!(err, ApiError::Forbidden(_)));
        }
    }

    #[test]
    fn any_involved_party_completes_an_accepted_mentorship() {
        use MentorshipStatus::*;
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let as_mentor = Caller {
            account_id: mentor,
            role: Role::Alumni,
        };
        let as_mentee = Caller {
            account_id: mentee,
            role: Role::Student,
        };
        assert!(check_status_change(&as_mentor, mentor, mentee, Accepted, Completed).is_ok());
        assert!(check_status_change(&as_mentee, mentor, mentee, Accepted, Completed).is_ok());
        assert!(
            check_status_change(&caller(Role::Admin), mentor, mentee, Accepted, Completed).is_ok()
        );
    }

    #[test]
    fn outsiders_are_forbidden_before_transition_checks() {
        use MentorshipStatus::*;
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let err = check_status_change(&caller(Role::Student), mentor, mentee, Pending, Accepted)
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn transitions_outside_the_graph_are_invalid() {
        use MentorshipStatus::*;
        let mentor = Uuid::new_v4();
        let mentee = Uuid::new_v4();
        let as_mentor = Caller {
            account_id: mentor,
            role: Role::Alumni,
        };

        let invalid = [
            (Pending, Completed),
            (Pending, Pending),
            (Accepted, Accepted),
            (Accepted, Rejected),
            (Accepted, Pending),
            (Rejected, Accepted),
            (Rejected, Completed),
            (Completed, Pending),
            (Completed, Accepted),
        ];
        for (from, to) in invalid {
            let err = check_status_change(&as_mentor, mentor, mentee, from, to).unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidRequest(_)),
                "{} -> {} should be invalid",
                from.as_str(),
                to.as_str()
            );
        }
    }
}
