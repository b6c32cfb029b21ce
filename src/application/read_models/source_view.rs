//! Flat, serialisable view of a source

use crate::catalog::domain::Source;
use serde::Serialize;

/// View representation of one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceView {
    pub id: i64,
    pub canonical_name: String,
    pub tevcat_name: String,
    pub other_names: Option<String>,
    /// Catalog name; `None` when the catalog id does not resolve
    pub catalog: Option<String>,
    pub source_type: String,
    pub ra: String,
    pub dec: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub galactic_l_deg: f64,
    pub galactic_b_deg: f64,
    pub distance: Option<String>,
    pub flux_crab: Option<f64>,
    pub spectral_index: Option<f64>,
    pub energy_threshold_gev: Option<f64>,
    pub size_x_deg: f64,
    pub size_y_deg: f64,
    pub discovery_date: Option<String>,
    pub discovered_by: String,
    pub variable: bool,
    pub extended: bool,
    /// Multi-line TeVCat summary, used by the text output
    #[serde(skip)]
    pub summary: String,
}

impl From<&Source> for SourceView {
    fn from(source: &Source) -> Self {
        let (ra, dec) = source.position().hms_dms();
        let distance = source.distance().to_string();
        let (size_x_deg, size_y_deg) = source.size();

        Self {
            id: source.id(),
            canonical_name: source.canonical_name().to_string(),
            tevcat_name: source.catalog_name().to_string(),
            other_names: source.other_names().map(str::to_string),
            catalog: source.catalog().ok().map(|c| c.name().to_string()),
            source_type: source.source_type_name().to_string(),
            ra,
            dec,
            ra_deg: source.position().ra(),
            dec_deg: source.position().dec(),
            galactic_l_deg: source.galactic().l(),
            galactic_b_deg: source.galactic().b(),
            distance: (!distance.is_empty()).then_some(distance),
            flux_crab: source.flux(),
            spectral_index: source.spectral_index(),
            energy_threshold_gev: source.energy_threshold(),
            size_x_deg,
            size_y_deg,
            discovery_date: source.discovery_date().map(|d| d.to_string()),
            discovered_by: source.observatory_name().to_string(),
            variable: source.is_variable(),
            extended: source.is_extended(),
            summary: source.summary(),
        }
    }
}
