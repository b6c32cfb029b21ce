use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, QueryRequest, SelectionRequest};
use crate::sky::separation::DEFAULT_SEARCH_RADIUS_DEG;

/// Query the TeVCat gamma-ray source catalog
#[derive(Parser, Debug)]
#[command(name = "tevcat")]
#[command(version)]
#[command(about = "Query the TeVCat gamma-ray source catalog", long_about = None)]
pub struct Args {
    /// Read a saved copy of the TeVCat page instead of fetching it
    #[arg(long, value_name = "FILE", global = true)]
    pub page: Option<PathBuf>,

    /// Path to a config file (defaults to ./tevcat.config.yml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List sources passing the search and catalog filter
    List(SelectionArgs),
    /// Show the full summary of one source
    Show {
        /// Source id or name (canonical or alternative, case-insensitive)
        query: String,
    },
    /// List catalogs in id order
    Catalogs,
    /// Find the nearest source to a galactic position
    #[command(allow_negative_numbers = true)]
    Nearest {
        /// Galactic longitude in degrees
        l: f64,
        /// Galactic latitude in degrees
        b: f64,
        /// Search radius in degrees
        #[arg(short, long, value_name = "DEG")]
        radius: Option<f64>,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Build the sky map scene of the selected sources
    Map {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Label each marker with the source name
        #[arg(long)]
        names: bool,
    },
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Default)]
pub struct SelectionArgs {
    /// Case-insensitive text matched against each source summary
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Enabled catalog name; can be specified multiple times
    /// (defaults to "Default Catalog" and "Newly Announced")
    #[arg(long = "catalog", value_name = "NAME")]
    pub catalogs: Vec<String>,
}

impl SelectionArgs {
    /// Selection with `catalogs` used when no `--catalog` was given.
    fn into_selection(self, catalogs: &[String]) -> SelectionRequest {
        let enabled = if self.catalogs.is_empty() {
            catalogs.to_vec()
        } else {
            self.catalogs
        };
        SelectionRequest::new(self.search, enabled)
    }
}

impl Command {
    /// Converts the command into a query, filling unset options from config.
    pub fn into_request(self, catalogs: &[String], radius_deg: Option<f64>) -> QueryRequest {
        match self {
            Command::List(selection) => QueryRequest::List(selection.into_selection(catalogs)),
            Command::Show { query } => QueryRequest::Show { query },
            Command::Catalogs => QueryRequest::Catalogs,
            Command::Nearest {
                l,
                b,
                radius,
                selection,
            } => QueryRequest::Nearest {
                l_deg: l,
                b_deg: b,
                radius_deg: radius.or(radius_deg).unwrap_or(DEFAULT_SEARCH_RADIUS_DEG),
                selection: selection.into_selection(catalogs),
            },
            Command::Map { selection, names } => QueryRequest::Map {
                selection: selection.into_selection(catalogs),
                show_names: names,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tevcat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_list_with_filters() {
        let args = parse(&["list", "--search", "crab", "--catalog", "Other Sources"]);
        assert_eq!(
            args.command,
            Command::List(SelectionArgs {
                search: "crab".to_string(),
                catalogs: vec!["Other Sources".to_string()],
            })
        );
        assert!(args.format.is_none());
        assert!(args.page.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&["catalogs", "-f", "json", "--page", "page.html", "-o", "out.json"]);
        assert_eq!(args.command, Command::Catalogs);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.page, Some(PathBuf::from("page.html")));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_nearest_accepts_negative_coordinates() {
        let args = parse(&["nearest", "-175.5", "-5.8", "--radius", "2"]);
        match args.command {
            Command::Nearest { l, b, radius, .. } => {
                assert_eq!((l, b, radius), (-175.5, -5.8, Some(2.0)));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result =
            Args::try_parse_from(["tevcat", "-f", "markdown", "catalogs"].iter().copied());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Args::try_parse_from(["tevcat"].iter().copied()).is_err());
    }

    #[test]
    fn test_into_request_uses_config_defaults() {
        let configured = vec!["Source Candidates".to_string()];

        let request = parse(&["list"]).command.into_request(&configured, None);
        assert_eq!(
            request,
            QueryRequest::List(SelectionRequest::new("", configured.clone()))
        );

        let request = parse(&["nearest", "1", "2"])
            .command
            .into_request(&configured, Some(0.5));
        match request {
            QueryRequest::Nearest {
                radius_deg,
                selection,
                ..
            } => {
                assert_eq!(radius_deg, 0.5);
                assert_eq!(selection.catalogs, configured);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_cli_flags_override_config() {
        let request = parse(&["nearest", "1", "2", "-r", "4", "--catalog", "Newly Announced"])
            .command
            .into_request(&["Other Sources".to_string()], Some(0.5));
        match request {
            QueryRequest::Nearest {
                radius_deg,
                selection,
                ..
            } => {
                assert_eq!(radius_deg, 4.0);
                assert_eq!(selection.catalogs, vec!["Newly Announced".to_string()]);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_map_names_flag() {
        let request = parse(&["map", "--names"]).command.into_request(&[], None);
        assert_eq!(
            request,
            QueryRequest::Map {
                selection: SelectionRequest::default(),
                show_names: true,
            }
        );
    }
}
