use std::time::Duration;

use url::Url;

/// Validated configuration used by the application.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) api: ApiOptions,
    pub(crate) search: SearchDefaults,
    pub(crate) theme: Option<String>,
    pub(crate) title: String,
}

/// Connection options for the contracts API.
#[derive(Debug, Clone)]
pub(crate) struct ApiOptions {
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
}

/// Defaults applied to fresh search sessions.
#[derive(Debug, Clone)]
pub(crate) struct SearchDefaults {
    pub(crate) page_size: u32,
    pub(crate) debounce: Duration,
}

impl ResolvedConfig {
    /// Print a human-readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("contracts API: {}", self.api.base_url);
        println!("request timeout: {}s", self.api.timeout.as_secs());
        println!("page size: {}", self.search.page_size);
        println!("debounce: {}ms", self.search.debounce.as_millis());
        println!("theme: {}", self.theme.as_deref().unwrap_or("default"));
    }
}
