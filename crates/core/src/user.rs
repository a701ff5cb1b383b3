//! User reference data.
//!
//! Users are immutable in this layer: there is no authentication and a
//! single hardcoded current user drives every mutation, so the type only
//! exists to attribute ownership and timeline events.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// A member of the quality department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub nombre: String,
    pub email: String,
    /// Optional avatar asset path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
