use super::catalog::{Catalog, CatalogIndex};
use super::coordinates::{EquatorialPosition, GalacticPosition};
use super::discovery_date::DiscoveryDate;
use super::distance::Distance;
use crate::shared::Result;
use std::fmt;
use std::sync::Arc;

/// Plain attributes of a source as published, already coerced to their types
#[derive(Debug, Clone, PartialEq)]
pub struct SourceAttributes {
    pub id: i64,
    pub canonical_name: String,
    pub other_names: Option<String>,
    /// TeVCat designation, `TeV JHHMM+DDd`
    pub catalog_name: String,
    pub catalog_id: i64,
    /// Id of the observatory that first detected the source
    pub discoverer: i64,
    pub observatory_name: String,
    pub source_type: i64,
    pub source_type_name: String,
    pub position: EquatorialPosition,
    pub variability: Option<i64>,
    pub owner: Option<i64>,
    /// Angular extent (x, y) in degrees
    pub size: (f64, f64),
    pub discovery_date: Option<DiscoveryDate>,
    pub spectral_index: Option<f64>,
    /// Flux in Crab units
    pub flux: Option<f64>,
    /// Energy threshold in GeV
    pub energy_threshold: Option<f64>,
    pub distance: Distance,
    pub extended: bool,
    pub public: bool,
    pub src_rank: Option<i64>,
    /// Marker image URL
    pub image: Option<String>,
    /// URL of the matching entry in Green's SNR catalog
    pub greens_catalog: Option<String>,
    pub notes: Option<String>,
    pub private_notes: Option<String>,
}

/// Source entity - one cataloged gamma-ray emitter
///
/// Immutable once built. The galactic position is computed at construction.
/// The source shares (but does not own exclusively) the catalog index of the
/// container it was loaded into, so `catalog()` works without a back pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    attributes: SourceAttributes,
    galactic: GalacticPosition,
    catalogs: Arc<CatalogIndex>,
}

impl Source {
    pub fn new(attributes: SourceAttributes, catalogs: Arc<CatalogIndex>) -> Self {
        let galactic = attributes.position.to_galactic();
        Self {
            attributes,
            galactic,
            catalogs,
        }
    }

    pub fn attributes(&self) -> &SourceAttributes {
        &self.attributes
    }

    pub fn id(&self) -> i64 {
        self.attributes.id
    }

    pub fn canonical_name(&self) -> &str {
        &self.attributes.canonical_name
    }

    pub fn other_names(&self) -> Option<&str> {
        self.attributes.other_names.as_deref()
    }

    pub fn catalog_name(&self) -> &str {
        &self.attributes.catalog_name
    }

    pub fn catalog_id(&self) -> i64 {
        self.attributes.catalog_id
    }

    /// The catalog this source is registered in.
    ///
    /// # Errors
    /// `TevCatError::UnknownCatalog` when the catalog id does not resolve.
    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalogs.get(self.attributes.catalog_id)
    }

    pub fn discoverer(&self) -> i64 {
        self.attributes.discoverer
    }

    pub fn observatory_name(&self) -> &str {
        &self.attributes.observatory_name
    }

    pub fn source_type(&self) -> i64 {
        self.attributes.source_type
    }

    pub fn source_type_name(&self) -> &str {
        &self.attributes.source_type_name
    }

    /// True when any variability code is set.
    pub fn is_variable(&self) -> bool {
        self.attributes.variability.is_some()
    }

    pub fn variability(&self) -> Option<i64> {
        self.attributes.variability
    }

    pub fn owner(&self) -> Option<i64> {
        self.attributes.owner
    }

    pub fn size(&self) -> (f64, f64) {
        self.attributes.size
    }

    pub fn discovery_date(&self) -> Option<DiscoveryDate> {
        self.attributes.discovery_date
    }

    pub fn spectral_index(&self) -> Option<f64> {
        self.attributes.spectral_index
    }

    pub fn flux(&self) -> Option<f64> {
        self.attributes.flux
    }

    pub fn energy_threshold(&self) -> Option<f64> {
        self.attributes.energy_threshold
    }

    pub fn distance(&self) -> &Distance {
        &self.attributes.distance
    }

    pub fn is_extended(&self) -> bool {
        self.attributes.extended
    }

    pub fn is_public(&self) -> bool {
        self.attributes.public
    }

    pub fn src_rank(&self) -> Option<i64> {
        self.attributes.src_rank
    }

    pub fn image(&self) -> Option<&str> {
        self.attributes.image.as_deref()
    }

    pub fn greens_catalog(&self) -> Option<&str> {
        self.attributes.greens_catalog.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.attributes.notes.as_deref()
    }

    pub fn private_notes(&self) -> Option<&str> {
        self.attributes.private_notes.as_deref()
    }

    /// Position as published (FK5, J2000).
    pub fn position(&self) -> &EquatorialPosition {
        &self.attributes.position
    }

    pub fn fk5(&self) -> EquatorialPosition {
        self.attributes.position
    }

    pub fn icrs(&self) -> EquatorialPosition {
        self.attributes.position.to_icrs()
    }

    /// FK4 (B1950) position.
    pub fn fk4(&self) -> EquatorialPosition {
        self.attributes.position.to_fk4()
    }

    pub fn galactic(&self) -> &GalacticPosition {
        &self.galactic
    }

    /// J2000 position as `HHhMMmSS.SSs ±DDdMMmSS.SSs`.
    pub fn hmsdms(&self) -> String {
        self.attributes.position.hmsdms()
    }

    /// Multi-line summary in the TeVCat page layout.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = &self.attributes;
        let (ra, dec) = attrs.position.hms_dms();

        writeln!(f, "Canonical Name:\t{}", attrs.canonical_name)?;
        writeln!(f, "TeVCat Name:\t{}", attrs.catalog_name)?;
        writeln!(
            f,
            "Other Names:\t{}",
            attrs.other_names.as_deref().unwrap_or_default()
        )?;
        writeln!(f, "Source Type:\t{}", attrs.source_type_name)?;
        writeln!(f, "RA:\t{} (hh mm ss)", ra)?;
        writeln!(f, "Dec:\t{} (dd mm ss)", dec)?;
        writeln!(f, "Gal Long:\t{:.2} (deg)", self.galactic.l())?;
        writeln!(f, "Gal Lat:\t{:.2} (deg)", self.galactic.b())?;

        let distance = attrs.distance.to_string();
        if distance.is_empty() {
            writeln!(f, "Distance:")?;
        } else {
            writeln!(f, "Distance:\t{}", distance)?;
        }

        match attrs.flux {
            Some(flux) => writeln!(f, "Flux:\t{:.3} (Crab Units)", flux)?,
            None => writeln!(f, "Flux:")?,
        }

        match attrs.energy_threshold {
            Some(eth) => writeln!(f, "Energy Threshold:\t{} (GeV)", eth.trunc() as i64)?,
            None => writeln!(f, "Energy Threshold:")?,
        }

        writeln!(f, "Size (X):\t{:.2} (deg)", attrs.size.0)?;
        writeln!(f, "Size (Y):\t{:.2} (deg)", attrs.size.1)?;

        match attrs.discovery_date {
            Some(date) => writeln!(f, "Discovery Date:\t{}", date)?,
            None => writeln!(f, "Discovery Date:")?,
        }

        write!(f, "Discovered by:\t{}", attrs.observatory_name)
    }
}
