//! Fixed registry of named plans and their backing files.
//!
//! The set of plans is part of the product, not user data: three named
//! playbooks, each mapped to one JSON file inside the data directory. The
//! table is resolved at load/save time and is not extensible at runtime.

/// A registered plan: short key, human-readable name, backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    /// Short key used on the command line (e.g. `b2c`).
    pub key: &'static str,
    /// Display name shown in listings and headers (e.g. `B2C`).
    pub display_name: &'static str,
    /// File name inside the data directory.
    pub file_name: &'static str,
}

impl PlanEntry {
    /// File name used when exporting this plan as a download.
    pub fn export_file_name(&self) -> String {
        format!("{}.json", self.key)
    }
}

/// All registered plans, in display order.
pub const PLANS: [PlanEntry; 3] = [
    PlanEntry {
        key: "b2c",
        display_name: "B2C",
        file_name: "b2c.json",
    },
    PlanEntry {
        key: "product",
        display_name: "Product-Based",
        file_name: "product.json",
    },
    PlanEntry {
        key: "b2b",
        display_name: "B2B",
        file_name: "b2b.json",
    },
];

/// Look up a plan by short key or display name.
///
/// Matching is ASCII-case-insensitive so `b2c`, `B2C` and `B2c` all resolve
/// to the same entry. Returns `None` for keys outside the fixed table.
pub fn find(key: &str) -> Option<&'static PlanEntry> {
    PLANS.iter().find(|entry| {
        entry.key.eq_ignore_ascii_case(key) || entry.display_name.eq_ignore_ascii_case(key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_short_key() {
        let entry = find("b2c").expect("b2c should be registered");
        assert_eq!(entry.file_name, "b2c.json");
        assert_eq!(entry.display_name, "B2C");
    }

    #[test]
    fn find_by_display_name() {
        let entry = find("Product-Based").expect("display name should resolve");
        assert_eq!(entry.key, "product");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("B2B"), find("b2b"));
        assert_eq!(find("PRODUCT"), find("product"));
    }

    #[test]
    fn find_unknown_key() {
        assert!(find("enterprise").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn export_file_name_uses_short_key() {
        let entry = find("Product-Based").unwrap();
        assert_eq!(entry.export_file_name(), "product.json");
    }

    #[test]
    fn keys_and_files_are_unique() {
        for (i, a) in PLANS.iter().enumerate() {
            for b in &PLANS[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.file_name, b.file_name);
            }
        }
    }
}
