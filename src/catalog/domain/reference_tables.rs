use std::collections::BTreeMap;

const TEVCAT_OBSERVATORIES: &[(i64, &str)] = &[
    (1, "Whipple"),
    (2, "Telescope Array"),
    (3, "HEGRA"),
    (5, "CANGAROO"),
    (6, "H.E.S.S."),
    (7, "MAGIC"),
    (8, "Milagro"),
    (9, "Durham"),
    (10, "Crimea"),
    (14, "VERITAS"),
    (15, "Potchefstroom"),
    (19, "ARGO-YBJ"),
    (22, "HAWC"),
];

const TEVCAT_SOURCE_TYPES: &[(i64, &str)] = &[
    (1, "HBL"),
    (7, "DARK"),
    (8, "FRI"),
    (10, "LBL"),
    (13, "PSR"),
    (14, "PWN"),
    (16, "Shell"),
    (17, "Starburst"),
    (18, "UNID"),
    (21, "XRB"),
    (22, "Cat. Var."),
    (24, "FSRQ"),
    (25, "IBL"),
    (27, "Gamma BIN"),
    (29, "SNR/Molec. Cloud"),
    (30, "Massive Star Cluster"),
    (31, "AGN (unknown type)"),
    (32, "Star Forming Region"),
    (33, "Globular Cluster"),
    (34, "BL Lac (class unclear)"),
    (35, "Binary"),
    (36, "Composite SNR"),
    (37, "Blazar"),
    (38, "Superbubble"),
];

/// Known observatory and source-type names used to cross-check records
///
/// Passed explicitly to the record builder so tests can substitute their own
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    observatories: BTreeMap<i64, String>,
    source_types: BTreeMap<i64, String>,
}

impl ReferenceTables {
    pub fn new(observatories: BTreeMap<i64, String>, source_types: BTreeMap<i64, String>) -> Self {
        Self {
            observatories,
            source_types,
        }
    }

    /// The tables matching the published TeVCat vocabulary.
    pub fn tevcat() -> Self {
        let to_map = |entries: &[(i64, &str)]| {
            entries
                .iter()
                .map(|(id, name)| (*id, name.to_string()))
                .collect()
        };
        Self::new(to_map(TEVCAT_OBSERVATORIES), to_map(TEVCAT_SOURCE_TYPES))
    }

    pub fn observatory_name(&self, id: i64) -> Option<&str> {
        self.observatories.get(&id).map(String::as_str)
    }

    pub fn is_known_observatory(&self, name: &str) -> bool {
        self.observatories.values().any(|n| n == name)
    }

    pub fn source_type_name(&self, id: i64) -> Option<&str> {
        self.source_types.get(&id).map(String::as_str)
    }

    pub fn is_known_source_type(&self, name: &str) -> bool {
        self.source_types.values().any(|n| n == name)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::tevcat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tevcat_observatories() {
        let tables = ReferenceTables::tevcat();
        assert_eq!(tables.observatory_name(6), Some("H.E.S.S."));
        assert_eq!(tables.observatory_name(22), Some("HAWC"));
        assert_eq!(tables.observatory_name(4), None);
        assert!(tables.is_known_observatory("VERITAS"));
        assert!(!tables.is_known_observatory("LHAASO"));
    }

    #[test]
    fn test_tevcat_source_types() {
        let tables = ReferenceTables::tevcat();
        assert_eq!(tables.source_type_name(14), Some("PWN"));
        assert_eq!(tables.source_type_name(2), None);
        assert!(tables.is_known_source_type("Composite SNR"));
        assert!(!tables.is_known_source_type("Nova"));
    }

    #[test]
    fn test_custom_tables() {
        let tables = ReferenceTables::new(
            BTreeMap::from([(100, "LHAASO".to_string())]),
            BTreeMap::new(),
        );
        assert_eq!(tables.observatory_name(100), Some("LHAASO"));
        assert!(!tables.is_known_observatory("Whipple"));
        assert_eq!(tables.source_type_name(1), None);
    }
}
