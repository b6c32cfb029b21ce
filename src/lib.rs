//! tevcat - typed access to the TeVCat gamma-ray source catalog
//!
//! The TeVCat web page embeds its whole catalog as a base64 JSON blob. This
//! library fetches the page, decodes the blob into typed `Source` and
//! `Catalog` records with advisory validation, answers queries against the
//! result and models a headless all-sky map in the Aitoff projection.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Records, reference tables and the
//!   decoding pipeline
//! - **Sky map** (`sky`): Projection, filtering, scene and interactive view state
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use tevcat::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let page_fetcher = FileSystemPageReader::new(PathBuf::from("tevcat.html"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Load the catalog
//! let response = LoadCatalogUseCase::new(page_fetcher, progress_reporter).execute()?;
//!
//! // Query it
//! let crab = response.tevcat.find("Crab")?;
//! println!("{}", crab.summary());
//!
//! // Explore the sky map
//! let mut view = ViewState::new(&response.tevcat);
//! view.handle(&response.tevcat, ViewEvent::SearchChanged("pwn".to_string()));
//! println!("{} markers", view.scene().sources.marker_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod sky;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemPageReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpPageFetcher;
    pub use crate::application::dto::{LoadResponse, OutputFormat, QueryRequest, SelectionRequest};
    pub use crate::application::use_cases::{LoadCatalogUseCase, QueryCatalogUseCase};
    pub use crate::catalog::domain::{
        Catalog, CatalogIndex, DiscoveryDate, Distance, EquatorialPosition, GalacticPosition,
        ReferenceTables, Source, TevCat,
    };
    pub use crate::catalog::services::ValidationWarning;
    pub use crate::ports::outbound::{
        CatalogFormatter, OutputPresenter, PageFetcher, ProgressReporter,
    };
    pub use crate::shared::error::TevCatError;
    pub use crate::shared::Result;
    pub use crate::sky::{
        angular_separation, nearest_source, pad_to_sky, sky_to_pad, BackgroundStyle, SkyScene,
        SourceFilter, ViewEvent, ViewState,
    };
}
