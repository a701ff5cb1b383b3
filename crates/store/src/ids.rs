//! Entity id generation.
//!
//! Ids are prefixed UUIDv7 strings (`CERT-0192…`). UUIDv7 keeps ids
//! sortable by creation time while ruling out the same-millisecond
//! collisions a timestamp+random scheme would allow.

use uuid::Uuid;

/// Well-known id prefixes per entity kind.
pub mod prefix {
    pub const CERTIFICATE: &str = "CERT";
    pub const INCIDENCIA: &str = "INC";
    pub const NOTIFICATION: &str = "NOT";
    pub const EVENT: &str = "EVT";
}

/// Generate a fresh prefixed id.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_their_prefix() {
        assert!(new_id(prefix::CERTIFICATE).starts_with("CERT-"));
        assert!(new_id(prefix::EVENT).starts_with("EVT-"));
    }

    #[test]
    fn uuid_part_is_well_formed() {
        let id = new_id(prefix::NOTIFICATION);
        let uuid_part = id.strip_prefix("NOT-").unwrap();
        assert!(Uuid::parse_str(uuid_part).is_ok());
    }

    #[test]
    fn ids_are_unique_in_a_tight_loop() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(new_id(prefix::CERTIFICATE)));
        }
    }
}
