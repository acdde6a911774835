use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use url::Url;

use crate::cli::CliArgs;
use hangarbay::filters::DEFAULT_PAGE_SIZE;

use super::resolved::{ApiOptions, ResolvedConfig, SearchDefaults};

pub(super) const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const MAX_PAGE_SIZE: u32 = 100;

/// Mirror of the configuration file representation before CLI overrides
/// and validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    search: SearchSection,
    ui: UiSection,
}

/// Contracts API connection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Search defaults prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    page_size: Option<u32>,
    debounce_ms: Option<u64>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    title: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.api_url.clone() {
            self.api.base_url = Some(url);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    /// Validate the merged values. An unusable API base URL is the one
    /// configuration problem treated as fatal; everything else falls back
    /// or clamps.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let base_url_text = self.api.base_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let base_url = Url::parse(base_url_text)
            .with_context(|| format!("invalid contracts API base URL: {base_url_text}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!("contracts API base URL must be http or https: {base_url}");
        }

        let timeout =
            Duration::from_secs(self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1));
        let page_size = self
            .search
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let debounce =
            Duration::from_millis(self.search.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS));

        Ok(ResolvedConfig {
            api: ApiOptions { base_url, timeout },
            search: SearchDefaults {
                page_size,
                debounce,
            },
            theme: self.ui.theme,
            title: self.ui.title.unwrap_or_else(|| "HangarBay".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = RawConfig::default().resolve().expect("resolve");
        assert_eq!(resolved.api.base_url.as_str(), "http://localhost:8000/api/v1");
        assert_eq!(resolved.api.timeout.as_secs(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(resolved.search.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.search.debounce.as_millis(), 300);
        assert_eq!(resolved.title, "HangarBay");
    }

    #[test]
    fn malformed_base_url_is_fatal() {
        let mut raw = RawConfig::default();
        raw.api.base_url = Some("not a url".into());
        assert!(raw.resolve().is_err());

        let mut raw = RawConfig::default();
        raw.api.base_url = Some("ftp://example.com".into());
        assert!(raw.resolve().is_err());
    }

    #[test]
    fn page_size_clamps_into_the_api_range() {
        let mut raw = RawConfig::default();
        raw.search.page_size = Some(5000);
        assert_eq!(raw.resolve().expect("resolve").search.page_size, 100);

        let mut raw = RawConfig::default();
        raw.search.page_size = Some(0);
        assert_eq!(raw.resolve().expect("resolve").search.page_size, 1);
    }
}
