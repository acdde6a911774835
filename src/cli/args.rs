use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use hangarbay::app_dirs;
use hangarbay::filters::{ContractKind, FilterSet, SortField, SortOrder};

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("hangarbay {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "hangarbay",
    version,
    long_version = long_version(),
    about = "Browse EVE Online public ship contracts from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `hangarbay` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "HANGARBAY_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "HANGARBAY_API_URL",
        help = "Base URL of the contracts API (default: from configuration)"
    )]
    pub(crate) api_url: Option<String>,
    #[arg(
        short = 'l',
        long,
        value_name = "URL",
        help = "Seed filters from a link pasted out of the web app (default: none)"
    )]
    pub(crate) link: Option<String>,
    #[arg(
        short = 'p',
        long,
        value_name = "N",
        help = "Start on this result page (default: 1)"
    )]
    pub(crate) page: Option<u32>,
    #[arg(
        short = 's',
        long,
        value_name = "N",
        help = "Results per page (default: from configuration)"
    )]
    pub(crate) size: Option<u32>,
    #[arg(
        short = 'q',
        long,
        value_name = "TEXT",
        help = "Initial search text (default: empty)"
    )]
    pub(crate) search: Option<String>,
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        value_name = "KIND",
        help = "Restrict results to one contract type (default: all)"
    )]
    pub(crate) kind: Option<KindArg>,
    #[arg(
        long,
        value_enum,
        value_name = "FIELD",
        help = "Sort results by this field (default: API order)"
    )]
    pub(crate) sort: Option<SortArg>,
    #[arg(
        long,
        value_enum,
        value_name = "DIR",
        help = "Sort direction, used together with --sort (default: desc)"
    )]
    pub(crate) order: Option<OrderArg>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: from configuration)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(long = "list-themes", help = "List the built-in themes and exit")]
    pub(crate) list_themes: bool,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before starting"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for the final result (default: plain)"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        help = "Fetch a single page and print it without the interactive UI"
    )]
    pub(crate) once: bool,
}

impl CliArgs {
    /// Build the initial filter state: deep-link values first, then typed
    /// flag overrides on top.
    pub(crate) fn initial_filters(&self, default_size: u32) -> FilterSet {
        let mut filters = match self.link.as_deref() {
            Some(link) => FilterSet::from_link(link).unwrap_or_else(|| {
                log::warn!("--link value is not a valid URL; starting from defaults");
                FilterSet::default()
            }),
            None => FilterSet {
                size: default_size,
                ..FilterSet::default()
            },
        };

        if let Some(page) = self.page {
            filters.page = page.max(1);
        }
        if let Some(size) = self.size {
            filters.size = size.max(1);
        }
        if let Some(search) = &self.search {
            filters.search = if search.trim().is_empty() {
                None
            } else {
                Some(search.clone())
            };
        }
        if let Some(kind) = self.kind {
            filters.kind = Some(kind.into());
        }
        if let Some(sort) = self.sort {
            filters.sort = Some(sort.into());
        }
        if let Some(order) = self.order {
            filters.order = Some(order.into());
        }
        filters
    }
}

/// Output format for the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// CLI mirror of [`ContractKind`], named after the wire tags.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    #[value(name = "item_exchange")]
    ItemExchange,
    Auction,
    Courier,
    Loan,
}

impl From<KindArg> for ContractKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::ItemExchange => ContractKind::ItemExchange,
            KindArg::Auction => ContractKind::Auction,
            KindArg::Courier => ContractKind::Courier,
            KindArg::Loan => ContractKind::Loan,
        }
    }
}

/// CLI mirror of [`SortField`], named after the wire tags.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum SortArg {
    #[value(name = "date_issued")]
    DateIssued,
    #[value(name = "date_expired")]
    DateExpired,
    Price,
    Collateral,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::DateIssued => SortField::DateIssued,
            SortArg::DateExpired => SortField::DateExpired,
            SortArg::Price => SortField::Price,
            SortArg::Collateral => SortField::Collateral,
        }
    }
}

/// CLI mirror of [`SortOrder`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}
