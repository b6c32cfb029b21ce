use crate::catalog::domain::TevCat;
use crate::catalog::services::ValidationWarning;

/// LoadResponse - result of the catalog load use case
///
/// Warnings have already been reported through the progress reporter; they
/// are returned as well so callers can inspect them.
#[derive(Debug, Clone)]
pub struct LoadResponse {
    pub tevcat: TevCat,
    pub warnings: Vec<ValidationWarning>,
}

impl LoadResponse {
    pub fn new(tevcat: TevCat, warnings: Vec<ValidationWarning>) -> Self {
        Self { tevcat, warnings }
    }
}
