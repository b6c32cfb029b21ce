use crate::catalog::domain::DiscoveryDate;
use std::fmt;

/// Advisory finding about a single source record
///
/// Warnings never stop a load; the record is built with the published value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    UnknownObservatoryName {
        source: String,
        observatory_name: String,
    },
    DiscovererMismatch {
        source: String,
        discoverer: i64,
        observatory_name: String,
    },
    UnknownVariability {
        source: String,
        code: i64,
    },
    UnknownOwner {
        source: String,
        code: i64,
    },
    ImplausibleDiscoveryDate {
        source: String,
        date: DiscoveryDate,
    },
    UnknownSourceTypeName {
        source: String,
        source_type_name: String,
    },
    SourceTypeMismatch {
        source: String,
        source_type: i64,
        source_type_name: String,
    },
    UnknownDistanceUnit {
        source: String,
        unit: String,
    },
}

impl ValidationWarning {
    /// Canonical name of the source the warning is about.
    pub fn source(&self) -> &str {
        match self {
            ValidationWarning::UnknownObservatoryName { source, .. }
            | ValidationWarning::DiscovererMismatch { source, .. }
            | ValidationWarning::UnknownVariability { source, .. }
            | ValidationWarning::UnknownOwner { source, .. }
            | ValidationWarning::ImplausibleDiscoveryDate { source, .. }
            | ValidationWarning::UnknownSourceTypeName { source, .. }
            | ValidationWarning::SourceTypeMismatch { source, .. }
            | ValidationWarning::UnknownDistanceUnit { source, .. } => source,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::UnknownObservatoryName {
                source,
                observatory_name,
            } => write!(
                f,
                "{}: unknown observatory name found: {}",
                source, observatory_name
            ),
            ValidationWarning::DiscovererMismatch {
                source,
                discoverer,
                observatory_name,
            } => write!(
                f,
                "{}: \"discoverer\" ({}) does not match with \"observatory_name\" ({})",
                source, discoverer, observatory_name
            ),
            ValidationWarning::UnknownVariability { source, code } => {
                write!(f, "{}: unknown variability type found: {}", source, code)
            }
            ValidationWarning::UnknownOwner { source, code } => {
                write!(f, "{}: unknown owner type found: {}", source, code)
            }
            ValidationWarning::ImplausibleDiscoveryDate { source, date } => {
                write!(f, "{}: invalid date format found: {}", source, date.value())
            }
            ValidationWarning::UnknownSourceTypeName {
                source,
                source_type_name,
            } => write!(
                f,
                "{}: unknown source type name found: {}",
                source, source_type_name
            ),
            ValidationWarning::SourceTypeMismatch {
                source,
                source_type,
                source_type_name,
            } => write!(
                f,
                "{}: \"source_type\" ({}) does not match with \"source_type_name\" ({})",
                source, source_type, source_type_name
            ),
            ValidationWarning::UnknownDistanceUnit { source, unit } => {
                write!(f, "{}: unknown distance unit found: {}", source, unit)
            }
        }
    }
}
