//! Branch models

use serde::{Deserialize, Serialize};

/// A pharmacy branch, used to resolve branch ids to human-readable
/// locations in report headers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

impl Branch {
    /// Normalized id match against an opaque branch id
    pub fn matches_id(&self, id: &str) -> bool {
        self.branch_id.trim() == id.trim()
    }
}

/// Resolve a branch id to a display name: the branch location when known,
/// otherwise `Branch {id}`
pub fn resolve_branch_name(branches: &[Branch], branch_id: &str) -> String {
    branches
        .iter()
        .find(|b| b.matches_id(branch_id))
        .map(|b| b.location.clone())
        .unwrap_or_else(|| format!("Branch {}", branch_id.trim()))
}
