use crate::sky::filter::DEFAULT_ENABLED_CATALOGS;
use crate::sky::separation::DEFAULT_SEARCH_RADIUS_DEG;

/// Source selection shared by the listing, nearest and map queries
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRequest {
    /// Case-insensitive text matched against each source summary
    pub search: String,
    /// Enabled catalog names; empty means the default catalogs
    pub catalogs: Vec<String>,
}

impl SelectionRequest {
    pub fn new(search: impl Into<String>, catalogs: Vec<String>) -> Self {
        Self {
            search: search.into(),
            catalogs,
        }
    }

    /// Enabled catalog names with the default applied.
    pub fn enabled_catalogs(&self) -> Vec<String> {
        if self.catalogs.is_empty() {
            DEFAULT_ENABLED_CATALOGS.iter().map(|c| c.to_string()).collect()
        } else {
            self.catalogs.clone()
        }
    }
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self::new("", Vec::new())
    }
}

/// QueryRequest - one query against a loaded catalog
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    /// Sources passing the selection, in catalog order
    List(SelectionRequest),
    /// One source by id or name
    Show { query: String },
    /// All catalogs in id order
    Catalogs,
    /// Nearest selected source to a galactic position
    Nearest {
        l_deg: f64,
        b_deg: f64,
        radius_deg: f64,
        selection: SelectionRequest,
    },
    /// Sky-map scene of the selected sources
    Map {
        selection: SelectionRequest,
        show_names: bool,
    },
}

impl QueryRequest {
    pub fn nearest(l_deg: f64, b_deg: f64, radius_deg: Option<f64>) -> Self {
        QueryRequest::Nearest {
            l_deg,
            b_deg,
            radius_deg: radius_deg.unwrap_or(DEFAULT_SEARCH_RADIUS_DEG),
            selection: SelectionRequest::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogs_applied() {
        let request = SelectionRequest::default();
        assert_eq!(
            request.enabled_catalogs(),
            vec!["Default Catalog".to_string(), "Newly Announced".to_string()]
        );

        let request = SelectionRequest::new("crab", vec!["Other Sources".to_string()]);
        assert_eq!(request.enabled_catalogs(), vec!["Other Sources".to_string()]);
    }

    #[test]
    fn test_nearest_default_radius() {
        match QueryRequest::nearest(10.0, 5.0, None) {
            QueryRequest::Nearest { radius_deg, .. } => assert_eq!(radius_deg, 3.0),
            other => panic!("unexpected request: {:?}", other),
        }
    }
}
