use std::path::Path;
use std::process;
use std::time::Duration;

use clap::Parser;
use tevcat::adapters::outbound::console::StderrProgressReporter;
use tevcat::adapters::outbound::filesystem::FileSystemPageReader;
use tevcat::adapters::outbound::network::{
    HttpPageFetcher, DEFAULT_TEVCAT_URL, DEFAULT_TIMEOUT_SECS,
};
use tevcat::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use tevcat::application::use_cases::{LoadCatalogUseCase, QueryCatalogUseCase};
use tevcat::cli::Args;
use tevcat::config::{self, ConfigFile};
use tevcat::ports::inbound::CatalogLoadPort;
use tevcat::ports::outbound::PageFetcher;
use tevcat::shared::error::ExitCode;
use tevcat::shared::Result;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Help and version exit 0, usage errors exit 2
        Err(e) => e.exit(),
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref(), Path::new("."))?;

    // CLI flags win over config values
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    // Create adapters (Dependency Injection)
    let page_fetcher = create_page_fetcher(args.page.as_deref(), &config)?;
    let progress_reporter = StderrProgressReporter::new();

    let response = LoadCatalogUseCase::new(page_fetcher, progress_reporter).load_catalog()?;

    let catalogs = config.catalogs.unwrap_or_default();
    let request = args
        .command
        .into_request(&catalogs, config.search_radius_deg);
    let model = QueryCatalogUseCase::new(&response.tevcat).execute(request)?;

    let formatted_output = FormatterFactory::create(format).format(&model)?;
    PresenterFactory::create(PresenterType::from(args.output)).present(&formatted_output)?;

    Ok(if model.is_match() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

/// Explicit `--config` must exist; otherwise `tevcat.config.yml` in `dir` is
/// used when present.
fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(dir)?.unwrap_or_default()),
    }
}

fn create_page_fetcher(page: Option<&Path>, config: &ConfigFile) -> Result<Box<dyn PageFetcher>> {
    if let Some(path) = page {
        return Ok(Box::new(FileSystemPageReader::new(path.to_path_buf())));
    }

    let url = config.url.as_deref().unwrap_or(DEFAULT_TEVCAT_URL);
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
    Ok(Box::new(HttpPageFetcher::with_url(url, timeout)?))
}
