use crate::application::read_models::CatalogReadModel;
use crate::shared::Result;

/// CatalogFormatter port for rendering query results
///
/// This port abstracts the output format (plain text, JSON).
pub trait CatalogFormatter {
    /// Formats a query result
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CatalogReadModel) -> Result<String>;
}
