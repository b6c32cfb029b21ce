use super::catalog::{Catalog, CatalogIndex};
use super::source::Source;
use crate::shared::error::TevCatError;
use crate::shared::Result;
use std::sync::Arc;

/// TevCat aggregate - the decoded catalog and the query façade over it
///
/// Owns every source in publication order and the catalog index the sources
/// refer to. Built once per load; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TevCat {
    version: String,
    sources: Vec<Source>,
    catalogs: Arc<CatalogIndex>,
}

impl TevCat {
    pub fn new(version: String, sources: Vec<Source>, catalogs: Arc<CatalogIndex>) -> Self {
        Self {
            version,
            sources,
            catalogs,
        }
    }

    /// Version string shown on the TeVCat page.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All sources, in the order they were published.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Looks up a catalog by id.
    ///
    /// # Errors
    /// `TevCatError::UnknownCatalog` when absent.
    pub fn catalog(&self, id: i64) -> Result<&Catalog> {
        self.catalogs.get(id)
    }

    pub fn catalogs(&self) -> &CatalogIndex {
        &self.catalogs
    }

    /// Looks up a source by its TeVCat id.
    ///
    /// # Errors
    /// `TevCatError::UnknownSource` when absent.
    pub fn source(&self, id: i64) -> Result<&Source> {
        self.sources.iter().find(|s| s.id() == id).ok_or_else(|| {
            TevCatError::UnknownSource {
                query: id.to_string(),
            }
            .into()
        })
    }

    /// Finds a source by id, canonical name, TeVCat name or one of its
    /// alternate names. Names compare case-insensitively.
    ///
    /// # Errors
    /// `TevCatError::UnknownSource` when nothing matches.
    pub fn find(&self, query: &str) -> Result<&Source> {
        let query = query.trim();
        if let Ok(id) = query.parse::<i64>() {
            if let Ok(source) = self.source(id) {
                return Ok(source);
            }
        }

        let needle = query.to_lowercase();
        let exact = self.sources.iter().find(|s| {
            s.canonical_name().to_lowercase() == needle
                || s.catalog_name().to_lowercase() == needle
        });
        let alias = || {
            self.sources.iter().find(|s| {
                s.other_names().is_some_and(|names| {
                    names
                        .split(',')
                        .any(|name| name.trim().to_lowercase() == needle)
                })
            })
        };

        exact.or_else(alias).ok_or_else(|| {
            TevCatError::UnknownSource {
                query: query.to_string(),
            }
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
