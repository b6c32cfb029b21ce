/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod page_fetcher;
pub mod progress_reporter;

pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use page_fetcher::PageFetcher;
pub use progress_reporter::ProgressReporter;
