//! Builder for constructing CatalogReadModel from domain objects

use super::catalog_read_model::{
    CatalogReadModel, CatalogView, NearestView, QueryMetadataView, QueryResult,
};
use super::source_view::SourceView;
use crate::catalog::domain::{Source, TevCat};
use crate::sky::{NearestMatch, SkyScene};
use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing CatalogReadModel from domain objects
pub struct CatalogReadModelBuilder;

impl CatalogReadModelBuilder {
    pub fn sources<'a, I>(tevcat: &TevCat, sources: I) -> CatalogReadModel
    where
        I: IntoIterator<Item = &'a Source>,
    {
        Self::wrap(
            tevcat,
            QueryResult::Sources(sources.into_iter().map(SourceView::from).collect()),
        )
    }

    pub fn source(tevcat: &TevCat, source: &Source) -> CatalogReadModel {
        Self::wrap(tevcat, QueryResult::Source(Box::new(SourceView::from(source))))
    }

    pub fn catalogs(tevcat: &TevCat) -> CatalogReadModel {
        let catalogs = tevcat
            .catalogs()
            .iter()
            .map(|catalog| CatalogView {
                id: catalog.id(),
                name: catalog.name().to_string(),
                description: catalog.description().to_string(),
                source_count: tevcat
                    .sources()
                    .iter()
                    .filter(|s| s.catalog_id() == catalog.id())
                    .count(),
            })
            .collect();
        Self::wrap(tevcat, QueryResult::Catalogs(catalogs))
    }

    pub fn nearest(
        tevcat: &TevCat,
        l_deg: f64,
        b_deg: f64,
        found: Option<NearestMatch<'_>>,
    ) -> CatalogReadModel {
        let nearest = found.map(|m| NearestView {
            l_deg,
            b_deg,
            separation_deg: m.separation_deg,
            source: SourceView::from(m.source),
        });
        Self::wrap(tevcat, QueryResult::Nearest(nearest))
    }

    pub fn sky_map(tevcat: &TevCat, scene: SkyScene) -> CatalogReadModel {
        Self::wrap(tevcat, QueryResult::SkyMap(Box::new(scene)))
    }

    fn wrap(tevcat: &TevCat, result: QueryResult) -> CatalogReadModel {
        CatalogReadModel {
            metadata: QueryMetadataView {
                tevcat_version: tevcat.version().to_string(),
                generated_at: Utc::now().to_rfc3339(),
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
            },
            result,
        }
    }
}
