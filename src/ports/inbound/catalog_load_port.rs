use crate::application::dto::LoadResponse;
use crate::shared::Result;

/// CatalogLoadPort - Inbound port for loading the catalog
///
/// This port defines the interface that external adapters (CLI, viewers)
/// use to obtain a fully built catalog.
pub trait CatalogLoadPort {
    /// Fetches, decodes and builds the catalog
    ///
    /// # Returns
    /// The catalog together with the advisory warnings raised while
    /// building it
    ///
    /// # Errors
    /// Returns an error if:
    /// - The page cannot be retrieved
    /// - The page lacks one of the embedded markers
    /// - The payload is not valid base64 / JSON
    /// - A record is missing a required field or names an unknown discoverer
    fn load_catalog(&self) -> Result<LoadResponse>;
}
