//! Read model for catalog queries
//!
//! One query result plus the metadata describing where it came from.

use super::source_view::SourceView;
use crate::sky::SkyScene;
use serde::Serialize;

/// Main read model handed to the formatters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReadModel {
    pub metadata: QueryMetadataView,
    #[serde(flatten)]
    pub result: QueryResult,
}

impl CatalogReadModel {
    /// Whether the query matched anything
    pub fn is_match(&self) -> bool {
        match &self.result {
            QueryResult::Sources(sources) => !sources.is_empty(),
            QueryResult::Source(_) => true,
            QueryResult::Catalogs(catalogs) => !catalogs.is_empty(),
            QueryResult::Nearest(nearest) => nearest.is_some(),
            QueryResult::SkyMap(_) => true,
        }
    }
}

/// View representation of query metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryMetadataView {
    /// TeVCat version published on the page
    pub tevcat_version: String,
    /// RFC 3339 timestamp of the query
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", content = "result", rename_all = "snake_case")]
pub enum QueryResult {
    Sources(Vec<SourceView>),
    Source(Box<SourceView>),
    Catalogs(Vec<CatalogView>),
    Nearest(Option<NearestView>),
    SkyMap(Box<SkyScene>),
}

/// View representation of a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Number of sources filed under this catalog
    pub source_count: usize,
}

/// Closest source to a requested galactic position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestView {
    pub l_deg: f64,
    pub b_deg: f64,
    pub separation_deg: f64,
    pub source: SourceView,
}
