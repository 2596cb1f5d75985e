//! ID prefix constants for all persisted entities.
//!
//! IDs have the form `{prefix}-{8 hex chars}` (e.g. `cmp-a3f8b2c1`) and are
//! generated in SQL via `randomblob(4)`. Profiles are the exception: their id
//! is the owning user's id, so no prefix exists for them.

pub const PREFIX_COMPLIANCE: &str = "cmp";
pub const PREFIX_ALERT: &str = "alr";
pub const PREFIX_REPORT: &str = "rpt";
pub const PREFIX_TEAM_MEMBER: &str = "tm";
pub const PREFIX_UPDATE: &str = "upd";

/// Every prefix in use, for validation and tooling.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_COMPLIANCE,
    PREFIX_ALERT,
    PREFIX_REPORT,
    PREFIX_TEAM_MEMBER,
    PREFIX_UPDATE,
];

/// Check whether `id` carries the given prefix (e.g. `has_prefix("cmp-a3f8b2c1", "cmp")`).
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.len() > prefix.len() + 1 && id.starts_with(prefix) && id.as_bytes()[prefix.len()] == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for prefix in ALL_PREFIXES {
            assert!(seen.insert(*prefix), "duplicate prefix {prefix}");
        }
    }

    #[test]
    fn has_prefix_matches_full_ids() {
        assert!(has_prefix("cmp-a3f8b2c1", PREFIX_COMPLIANCE));
        assert!(has_prefix("rpt-00000000", PREFIX_REPORT));
        assert!(!has_prefix("cmp", PREFIX_COMPLIANCE));
        assert!(!has_prefix("cmpa3f8b2c1", PREFIX_COMPLIANCE));
        assert!(!has_prefix("alr-a3f8b2c1", PREFIX_COMPLIANCE));
    }
}
