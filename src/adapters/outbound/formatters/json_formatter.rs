use crate::application::read_models::CatalogReadModel;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serialises the whole read model (metadata, query kind and result) as
/// pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CatalogReadModelBuilder;
    use crate::catalog::domain::source::tests::crab_attributes;
    use crate::catalog::domain::{Catalog, CatalogIndex, Source, TevCat};
    use std::sync::Arc;

    #[test]
    fn test_format_source_json() {
        let catalogs: Arc<CatalogIndex> = Arc::new(
            vec![Catalog::new(1, "Default Catalog".to_string(), String::new())]
                .into_iter()
                .collect(),
        );
        let source = Source::new(crab_attributes(), Arc::clone(&catalogs));
        let tevcat = TevCat::new("3.400".to_string(), vec![source], catalogs);

        let output = JsonFormatter::new()
            .format(&CatalogReadModelBuilder::source(&tevcat, &tevcat.sources()[0]))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["query"], "source");
        assert_eq!(json["result"]["canonical_name"], "Crab");
        assert_eq!(json["result"]["catalog"], "Default Catalog");
        assert_eq!(json["result"]["discovered_by"], "Whipple");
        assert_eq!(json["result"]["energy_threshold_gev"], 300.0);
        assert_eq!(json["metadata"]["tool_name"], "tevcat");
    }

    #[test]
    fn test_format_nearest_none_json() {
        let tevcat = TevCat::new("3.400".to_string(), Vec::new(), Arc::new(CatalogIndex::new()));
        let output = JsonFormatter::new()
            .format(&CatalogReadModelBuilder::nearest(&tevcat, 1.0, 2.0, None))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["query"], "nearest");
        assert!(json["result"].is_null());
    }
}
