mod cli;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};

use hangarbay::filters::FilterSet;
use hangarbay::gateway::{ContractGateway, HttpGateway};
use hangarbay::search::{ContractSearch, SearchOptions};
use hangarbay::ui::{App, UiOptions, theme};

use cli::{CliArgs, OutputFormat, parse_cli};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let filters = cli.initial_filters(resolved.search.page_size);
    let gateway = Arc::new(
        HttpGateway::new(&resolved.api.base_url, resolved.api.timeout)
            .context("failed to initialise the contracts API client")?,
    );

    if cli.once {
        return run_once(cli.output, gateway, filters);
    }

    run_browser(&cli, resolved, gateway, filters)
}

/// Fetch a single page and print it without entering the interactive UI.
fn run_once(format: OutputFormat, gateway: Arc<HttpGateway>, filters: FilterSet) -> Result<()> {
    let page = gateway.fetch(&filters).context("contract fetch failed")?;
    match format {
        OutputFormat::Plain => cli::print_page_plain(&page),
        OutputFormat::Json => cli::print_page_json(&page)?,
    }
    Ok(())
}

/// Run the interactive browser and print the outcome in the chosen
/// format.
fn run_browser(
    cli: &CliArgs,
    resolved: ResolvedConfig,
    gateway: Arc<HttpGateway>,
    filters: FilterSet,
) -> Result<()> {
    let search = ContractSearch::new(
        gateway,
        SearchOptions {
            debounce: resolved.search.debounce,
        },
    );
    search.set_initial_filters(filters);

    let selected_theme = match resolved.theme.as_deref() {
        Some(name) => theme::by_name(name).unwrap_or_else(|| {
            log::warn!("unknown theme {name:?}; falling back to the default");
            theme::default_theme()
        }),
        None => theme::default_theme(),
    };

    let app = App::new(
        search,
        UiOptions {
            title: resolved.title.clone(),
            theme: selected_theme,
        },
    );
    let outcome = app.run()?;

    match cli.output {
        OutputFormat::Plain => cli::print_plain(&outcome),
        OutputFormat::Json => cli::print_json(&outcome)?,
    }
    Ok(())
}
