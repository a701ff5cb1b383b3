//! Project aggregate root.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::EntityId;
use crate::user::User;

/// Regex matching well-formed project ids (`P-001`, `P-042`, …).
static PROJECT_ID_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^P-\d{3}$").expect("valid regex"));

/// A project grouping purchase orders for a plant or site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project id in `P-NNN` format.
    pub id: EntityId,
    pub nombre: String,
    /// The quality engineer responsible for the project.
    pub owner: User,
    pub created_at: NaiveDate,
}

/// Returns `true` if the given id follows the `P-NNN` convention.
pub fn is_valid_project_id(id: &str) -> bool {
    PROJECT_ID_RE.is_match(id)
}
