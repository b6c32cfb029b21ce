use super::field_reader::FieldReader;
use super::payload_decoder::DecodedPayload;
use super::validation::ValidationWarning;
use crate::catalog::domain::{
    Catalog, CatalogIndex, DiscoveryDate, Distance, DistanceUnit, EquatorialPosition,
    ReferenceTables, Source, SourceAttributes, TevCat,
};
use crate::shared::error::TevCatError;
use crate::shared::Result;
use serde_json::{Map, Value};
use std::sync::Arc;

const KNOWN_VARIABILITY_CODES: [i64; 3] = [0, 1, 2];
const KNOWN_OWNER_CODES: [i64; 2] = [1, 2];

/// A fully built catalog together with the advisory findings raised while
/// building it
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogAssembly {
    pub tevcat: TevCat,
    pub warnings: Vec<ValidationWarning>,
}

/// RecordBuilder service - turns decoded JSON into validated domain records
///
/// Most consistency checks only produce a [`ValidationWarning`]. Two cases
/// abort the whole load: a required key that is missing (or of the wrong
/// shape), and a discoverer id that has no entry in the observatory table.
pub struct RecordBuilder<'t> {
    tables: &'t ReferenceTables,
}

impl<'t> RecordBuilder<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self { tables }
    }

    /// Builds the container from a decoded payload, calling `on_progress`
    /// with `(built, total)` after each source.
    ///
    /// Either every record is built or an error is returned; nothing partial
    /// escapes.
    pub fn assemble<P>(
        &self,
        version: String,
        payload: &DecodedPayload,
        mut on_progress: P,
    ) -> Result<CatalogAssembly>
    where
        P: FnMut(usize, usize),
    {
        let catalogs = Arc::new(self.build_catalogs(&payload.catalogs)?);

        let total = payload.sources.len();
        let mut warnings = Vec::new();
        let sources = payload
            .sources
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let source = self.build_source(raw, index, &catalogs, &mut warnings)?;
                on_progress(index + 1, total);
                Ok(source)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CatalogAssembly {
            tevcat: TevCat::new(version, sources, catalogs),
            warnings,
        })
    }

    /// Builds the catalog index from the `catalogs` mapping.
    ///
    /// Catalogs are indexed by their mapping key, which must be an integer.
    pub fn build_catalogs(&self, raw: &Map<String, Value>) -> Result<CatalogIndex> {
        let mut index = CatalogIndex::new();
        for (key, value) in raw {
            let id_key: i64 = key.trim().parse().map_err(|_| TevCatError::InvalidPayload {
                details: format!("catalog key '{}' is not an integer", key),
            })?;
            let record = value.as_object().ok_or_else(|| TevCatError::InvalidPayload {
                details: format!("catalog '{}' is not an object", key),
            })?;
            let reader = FieldReader::new(record, format!("catalog '{}'", key));

            let catalog = Catalog::new(
                reader.int("id")?,
                reader.string("name")?,
                reader.optional_string("description")?.unwrap_or_default(),
            )
            .with_access(
                reader.optional_string("role_id")?.unwrap_or_default(),
                reader.optional_string("public")?.unwrap_or_default(),
            );
            index.insert_at(id_key, catalog);
        }
        Ok(index)
    }

    /// Builds one source, appending any advisory findings to `warnings`.
    pub fn build_source(
        &self,
        raw: &Map<String, Value>,
        index: usize,
        catalogs: &Arc<CatalogIndex>,
        warnings: &mut Vec<ValidationWarning>,
    ) -> Result<Source> {
        let reader = FieldReader::new(raw, format!("source #{}", index));
        let canonical_name = reader.string("canonical_name")?;
        let name = || canonical_name.clone();

        let observatory_name = reader.string("observatory_name")?;
        if !self.tables.is_known_observatory(&observatory_name) {
            warnings.push(ValidationWarning::UnknownObservatoryName {
                source: name(),
                observatory_name: observatory_name.clone(),
            });
        }

        let discoverer = reader.int("discoverer")?;
        match self.tables.observatory_name(discoverer) {
            None => {
                return Err(TevCatError::UnknownDiscoverer {
                    observatory_name,
                    discoverer,
                }
                .into())
            }
            Some(known) if known != observatory_name => {
                warnings.push(ValidationWarning::DiscovererMismatch {
                    source: name(),
                    discoverer,
                    observatory_name: observatory_name.clone(),
                });
            }
            Some(_) => {}
        }

        let variability = reader.optional_int("variability")?;
        if let Some(code) = variability.filter(|c| !KNOWN_VARIABILITY_CODES.contains(c)) {
            warnings.push(ValidationWarning::UnknownVariability {
                source: name(),
                code,
            });
        }

        let owner = reader.optional_int("owner")?;
        if let Some(code) = owner.filter(|c| !KNOWN_OWNER_CODES.contains(c)) {
            warnings.push(ValidationWarning::UnknownOwner {
                source: name(),
                code,
            });
        }

        let discovery_date =
            reader.optional_parsed("discovery_date", "a YYYY/MM date", |text| {
                DiscoveryDate::parse(text).ok()
            })?;
        if let Some(date) = discovery_date.filter(|d| !d.is_plausible()) {
            warnings.push(ValidationWarning::ImplausibleDiscoveryDate {
                source: name(),
                date,
            });
        }

        let source_type = reader.int("source_type")?;
        let source_type_name = reader.string("source_type_name")?;
        if !self.tables.is_known_source_type(&source_type_name) {
            warnings.push(ValidationWarning::UnknownSourceTypeName {
                source: name(),
                source_type_name: source_type_name.clone(),
            });
        }
        if self.tables.source_type_name(source_type) != Some(source_type_name.as_str()) {
            warnings.push(ValidationWarning::SourceTypeMismatch {
                source: name(),
                source_type,
                source_type_name: source_type_name.clone(),
            });
        }

        let distance_unit = DistanceUnit::from_tag(reader.optional_string("distance_mod")?.as_deref());
        if let DistanceUnit::Other(unit) = &distance_unit {
            warnings.push(ValidationWarning::UnknownDistanceUnit {
                source: name(),
                unit: unit.clone(),
            });
        }
        let distance = Distance::new(reader.optional_float("distance")?, distance_unit);

        let position = EquatorialPosition::from_sexagesimal(
            &reader.string("coord_ra")?,
            &reader.string("coord_dec")?,
        )?;

        let attributes = SourceAttributes {
            id: reader.int("id")?,
            canonical_name,
            other_names: reader.optional_string("other_names")?,
            catalog_name: reader.string("catalog_name")?,
            catalog_id: reader.int("catalog_id")?,
            discoverer,
            observatory_name,
            source_type,
            source_type_name,
            position,
            variability,
            owner,
            size: (
                reader.optional_float("size_x")?.unwrap_or(0.0),
                reader.optional_float("size_y")?.unwrap_or(0.0),
            ),
            discovery_date,
            spectral_index: reader.optional_float("spec_idx")?,
            flux: reader.optional_float("flux")?,
            energy_threshold: reader.optional_float("eth")?,
            distance,
            extended: reader.flag("ext")?,
            public: reader.optional_int("public")?.map_or(true, |p| p != 0),
            src_rank: reader.optional_int("src_rank")?,
            image: reader.optional_string("image")?,
            greens_catalog: reader.optional_string("greens_cat")?,
            notes: reader.optional_string("notes")?,
            private_notes: reader.optional_string("private_notes")?,
        };

        Ok(Source::new(attributes, Arc::clone(catalogs)))
    }
}
