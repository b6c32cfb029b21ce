use crate::application::dto::{QueryRequest, SelectionRequest};
use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
use crate::catalog::domain::TevCat;
use crate::shared::error::TevCatError;
use crate::shared::Result;
use crate::sky::{nearest_source, BackgroundStyle, SkyScene, SourceFilter};

/// QueryCatalogUseCase - answers one query against a loaded catalog
pub struct QueryCatalogUseCase<'a> {
    tevcat: &'a TevCat,
}

impl<'a> QueryCatalogUseCase<'a> {
    pub fn new(tevcat: &'a TevCat) -> Self {
        Self { tevcat }
    }

    /// Executes the query
    ///
    /// # Errors
    /// `TevCatError::UnknownSource` when `Show` matches nothing, and
    /// `TevCatError::Validation` for a latitude outside `[-90, 90]`, a
    /// non-finite longitude or a negative search radius.
    pub fn execute(&self, request: QueryRequest) -> Result<CatalogReadModel> {
        let tevcat = self.tevcat;
        match request {
            QueryRequest::List(selection) => {
                let filter = Self::filter(&selection);
                Ok(CatalogReadModelBuilder::sources(tevcat, filter.apply(tevcat)))
            }
            QueryRequest::Show { query } => {
                let source = tevcat.find(&query)?;
                Ok(CatalogReadModelBuilder::source(tevcat, source))
            }
            QueryRequest::Catalogs => Ok(CatalogReadModelBuilder::catalogs(tevcat)),
            QueryRequest::Nearest {
                l_deg,
                b_deg,
                radius_deg,
                selection,
            } => {
                if !l_deg.is_finite() {
                    return Err(TevCatError::Validation {
                        message: format!("galactic longitude must be finite, got {}", l_deg),
                    }
                    .into());
                }
                if !(-90.0..=90.0).contains(&b_deg) {
                    return Err(TevCatError::Validation {
                        message: format!(
                            "galactic latitude must be within [-90, 90], got {}",
                            b_deg
                        ),
                    }
                    .into());
                }
                if radius_deg.is_nan() || radius_deg < 0.0 {
                    return Err(TevCatError::Validation {
                        message: format!("search radius must be non-negative, got {}", radius_deg),
                    }
                    .into());
                }
                let filter = Self::filter(&selection);
                let found = nearest_source(filter.apply(tevcat), l_deg, b_deg, radius_deg);
                Ok(CatalogReadModelBuilder::nearest(tevcat, l_deg, b_deg, found))
            }
            QueryRequest::Map {
                selection,
                show_names,
            } => {
                let filter = Self::filter(&selection);
                let scene = SkyScene::build(tevcat, &filter, BackgroundStyle::default(), show_names);
                Ok(CatalogReadModelBuilder::sky_map(tevcat, scene))
            }
        }
    }

    fn filter(selection: &SelectionRequest) -> SourceFilter {
        SourceFilter::new(&selection.search, selection.enabled_catalogs())
    }
}
