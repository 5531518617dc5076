//! Command-line flags for the catalog viewer.

use storefront_catalog::{SortOrder, ViewMode};

/// Environment variable overriding the default catalog endpoint.
/// The `--url` flag wins over both.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

pub const USAGE: &str = "\
storefront - browse a remote product catalog from the terminal

USAGE:
  storefront [OPTIONS]

OPTIONS:
  --url <URL>            Product API endpoint (or STOREFRONT_API_URL)
  --search <TEXT>        Case-insensitive title search
  --category <NAME>      Category filter (\"All\" disables it)
  --sort <ORDER>         price-asc | price-desc | name-asc | name-desc
  --view <MODE>          card | list
  --page <N>             1-based page number
  --page-size <N>        Products per page (default 10)
  -h, --help             Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub help: bool,
    pub url: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
    pub view: Option<ViewMode>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl Args {
    pub fn parse() -> Result<Self, pico_args::Error> {
        Self::from_args(pico_args::Arguments::from_env())
    }

    fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        Ok(Self {
            help: args.contains(["-h", "--help"]),
            url: args.opt_value_from_str("--url")?,
            search: args.opt_value_from_str("--search")?,
            category: args.opt_value_from_str("--category")?,
            sort: args.opt_value_from_str("--sort")?,
            view: args.opt_value_from_str("--view")?,
            page: args.opt_value_from_str("--page")?,
            page_size: args.opt_value_from_str("--page-size")?,
        })
    }
}
