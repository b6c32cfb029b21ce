use crate::catalog::domain::{Source, TevCat};
use std::collections::BTreeSet;

/// Catalogs offered by the sky map, in display order
pub const VIEWER_CATALOGS: [&str; 4] = [
    "Default Catalog",
    "Newly Announced",
    "Other Sources",
    "Source Candidates",
];

/// Catalogs enabled when the sky map opens
pub const DEFAULT_ENABLED_CATALOGS: [&str; 2] = ["Default Catalog", "Newly Announced"];

/// Search text plus enabled catalog names
///
/// A source is shown when its catalog name is enabled and its lower-cased
/// summary contains the lower-cased search text. Sources whose catalog id
/// does not resolve are never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    search: String,
    enabled_catalogs: BTreeSet<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new("", DEFAULT_ENABLED_CATALOGS)
    }
}

impl SourceFilter {
    pub fn new<I, S>(search: &str, enabled_catalogs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search: search.to_lowercase(),
            enabled_catalogs: enabled_catalogs.into_iter().map(Into::into).collect(),
        }
    }

    /// Lower-cased search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_lowercase();
    }

    pub fn enabled_catalogs(&self) -> impl Iterator<Item = &str> {
        self.enabled_catalogs.iter().map(String::as_str)
    }

    pub fn is_enabled(&self, catalog_name: &str) -> bool {
        self.enabled_catalogs.contains(catalog_name)
    }

    pub fn set_enabled(&mut self, catalog_name: &str, enabled: bool) {
        if enabled {
            self.enabled_catalogs.insert(catalog_name.to_string());
        } else {
            self.enabled_catalogs.remove(catalog_name);
        }
    }

    pub fn shows(&self, source: &Source) -> bool {
        let catalog_enabled = source
            .catalog()
            .map(|catalog| self.is_enabled(catalog.name()))
            .unwrap_or(false);

        catalog_enabled && source.summary().to_lowercase().contains(&self.search)
    }

    /// Shown sources of `tevcat`, in catalog order.
    pub fn apply<'a>(&'a self, tevcat: &'a TevCat) -> impl Iterator<Item = &'a Source> + 'a {
        tevcat.sources().iter().filter(move |source| self.shows(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::source::tests::crab_attributes;
    use crate::catalog::domain::{Catalog, CatalogIndex};
    use std::sync::Arc;

    fn tevcat() -> TevCat {
        let catalogs: Arc<CatalogIndex> = Arc::new(
            vec![
                Catalog::new(1, "Default Catalog".to_string(), String::new()),
                Catalog::new(3, "Other Sources".to_string(), String::new()),
            ]
            .into_iter()
            .collect(),
        );

        let crab = crab_attributes();

        let mut other = crab_attributes();
        other.id = 200;
        other.canonical_name = "Vela X".to_string();
        other.catalog_id = 3;

        let mut dangling = crab_attributes();
        dangling.id = 300;
        dangling.canonical_name = "Lost".to_string();
        dangling.catalog_id = 9;

        let sources = vec![crab, other, dangling]
            .into_iter()
            .map(|attrs| Source::new(attrs, Arc::clone(&catalogs)))
            .collect();
        TevCat::new("3.400".to_string(), sources, catalogs)
    }

    fn names(filter: &SourceFilter, tevcat: &TevCat) -> Vec<String> {
        filter
            .apply(tevcat)
            .map(|s| s.canonical_name().to_string())
            .collect()
    }

    #[test]
    fn test_default_filter() {
        let tevcat = tevcat();
        let filter = SourceFilter::default();
        assert!(filter.is_enabled("Default Catalog"));
        assert!(filter.is_enabled("Newly Announced"));
        assert!(!filter.is_enabled("Other Sources"));
        assert_eq!(names(&filter, &tevcat), vec!["Crab"]);
    }

    #[test]
    fn test_toggle_catalog() {
        let tevcat = tevcat();
        let mut filter = SourceFilter::default();
        filter.set_enabled("Other Sources", true);
        assert_eq!(names(&filter, &tevcat), vec!["Crab", "Vela X"]);
        filter.set_enabled("Default Catalog", false);
        assert_eq!(names(&filter, &tevcat), vec!["Vela X"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_summary() {
        let tevcat = tevcat();
        let mut filter = SourceFilter::new("", VIEWER_CATALOGS);
        filter.set_search("VELA");
        assert_eq!(names(&filter, &tevcat), vec!["Vela X"]);

        // Matches the "Discovered by" line of every shown source
        filter.set_search("whipple");
        assert_eq!(names(&filter, &tevcat), vec!["Crab", "Vela X"]);

        filter.set_search("no such text");
        assert!(names(&filter, &tevcat).is_empty());
    }

    #[test]
    fn test_unresolved_catalog_is_hidden() {
        let tevcat = tevcat();
        let filter = SourceFilter::new("lost", VIEWER_CATALOGS);
        assert!(names(&filter, &tevcat).is_empty());
    }
}
