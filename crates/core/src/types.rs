//! Shared type aliases for the domain layer.

/// All entity ids are human-readable prefixed strings (`"P-001"`,
/// `"PO-4500001"`, `"CERT-…"`).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
