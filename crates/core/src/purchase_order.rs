//! Purchase orders.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::EntityId;
use crate::user::User;

/// Regex matching well-formed PO ids (`PO-4500001`, …).
static PO_ID_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^PO-\d+$").expect("valid regex"));

/// A purchase order. Belongs to exactly one [`Project`](crate::Project);
/// `proyecto_id` must reference an existing project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// PO id in `PO-NNNNNNN` format.
    pub id: EntityId,
    /// Bare order number without the `PO-` prefix.
    pub numero: String,
    pub proyecto_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    pub created_at: NaiveDate,
}

/// Returns `true` if the given id follows the `PO-N…` convention.
pub fn is_valid_po_id(id: &str) -> bool {
    PO_ID_RE.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ids_accepted() {
        assert!(is_valid_po_id("PO-4500001"));
        assert!(is_valid_po_id("PO-1"));
    }

    #[test]
    fn malformed_ids_rejected() {
        assert!(!is_valid_po_id(""));
        assert!(!is_valid_po_id("po-4500001"));
        assert!(!is_valid_po_id("PO-"));
        assert!(!is_valid_po_id("P-001"));
        assert!(!is_valid_po_id("PO 4500001"));
    }
}
