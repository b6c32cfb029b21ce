use crate::application::dto::LoadResponse;
use crate::catalog::domain::ReferenceTables;
use crate::catalog::services::{PageScanner, PayloadDecoder, RecordBuilder};
use crate::ports::inbound::CatalogLoadPort;
use crate::ports::outbound::{PageFetcher, ProgressReporter};
use crate::shared::Result;

/// LoadCatalogUseCase - fetch, decode and build the TeVCat catalog
///
/// # Type Parameters
/// * `F` - PageFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadCatalogUseCase<F, PR> {
    page_fetcher: F,
    progress_reporter: PR,
    tables: ReferenceTables,
}

impl<F, PR> LoadCatalogUseCase<F, PR>
where
    F: PageFetcher,
    PR: ProgressReporter,
{
    /// Creates a use case checking records against the built-in tables
    pub fn new(page_fetcher: F, progress_reporter: PR) -> Self {
        Self::with_tables(page_fetcher, progress_reporter, ReferenceTables::tevcat())
    }

    pub fn with_tables(page_fetcher: F, progress_reporter: PR, tables: ReferenceTables) -> Self {
        Self {
            page_fetcher,
            progress_reporter,
            tables,
        }
    }

    /// Executes the load
    ///
    /// Validation warnings are reported through the progress reporter and
    /// returned in the response. A fatal error leaves nothing behind and is
    /// reported through `report_error` before it is returned.
    pub fn execute(&self) -> Result<LoadResponse> {
        self.load().map_err(|e| {
            self.progress_reporter.report_error(&format!(
                "❌ Failed to load TeVCat catalog from {}",
                self.page_fetcher.location()
            ));
            e
        })
    }

    fn load(&self) -> Result<LoadResponse> {
        // Step 1: Fetch the page
        self.progress_reporter.report_waiting(&format!(
            "🌐 Fetching TeVCat page from {}...",
            self.page_fetcher.location()
        ));
        let html = self.page_fetcher.fetch_page()?;

        // Step 2: Locate the embedded payload
        let embedded = PageScanner::scan(&html)?;
        self.progress_reporter.report(&format!(
            "📦 Decoding catalog payload (TeVCat {})...",
            embedded.version
        ));

        // Step 3: Decode
        let payload = PayloadDecoder::decode(&embedded.data, embedded.length)?;

        // Step 4: Build records
        let builder = RecordBuilder::new(&self.tables);
        let assembly = builder.assemble(embedded.version, &payload, |built, total| {
            self.progress_reporter
                .report_progress(built, total, Some("Building source records"));
        })?;

        for warning in &assembly.warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} sources in {} catalogs (TeVCat {})",
            assembly.tevcat.len(),
            assembly.tevcat.catalogs().len(),
            assembly.tevcat.version()
        ));

        Ok(LoadResponse::new(assembly.tevcat, assembly.warnings))
    }
}

impl<F, PR> CatalogLoadPort for LoadCatalogUseCase<F, PR>
where
    F: PageFetcher,
    PR: ProgressReporter,
{
    fn load_catalog(&self) -> Result<LoadResponse> {
        self.execute()
    }
}

#[cfg(test)]
mod tests;
