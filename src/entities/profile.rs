use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// Account state gating ride booking. The identity-document review itself
/// happens in an external process; this service only reads the outcome.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub id_proof_path: Option<String>,
    pub verification_status: VerificationStatus,
}

impl UserProfile {
    pub fn pending(user_id: Uuid) -> Self {
        Self {
            user_id,
            full_name: None,
            id_proof_path: None,
            verification_status: VerificationStatus::Pending,
        }
    }
}
