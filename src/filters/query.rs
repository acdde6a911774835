//! Construction of a [`FilterSet`] from raw, untrusted query parameters.
//!
//! Links pasted from the web app carry their state in the URL query string.
//! Every field is validated independently and falls back to its default on
//! bad input; nothing here ever fails hard.

use url::Url;
use url::form_urlencoded;

use super::{ContractKind, FilterSet, SortField, SortOrder};

impl FilterSet {
    /// Build a validated set from raw key/value pairs.
    ///
    /// `page` and `size` must parse as positive integers, `type`, `sort`
    /// and `order` must name members of their closed sets, and `search`
    /// passes through only when non-empty. Anything else is silently
    /// replaced by the default. Unknown keys are ignored. Repeated keys
    /// keep the last occurrence.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filters = FilterSet::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "page" => {
                    if let Some(page) = parse_positive(value) {
                        filters.page = page;
                    }
                }
                "size" => {
                    if let Some(size) = parse_positive(value) {
                        filters.size = size;
                    }
                }
                "search" => {
                    filters.search = if value.trim().is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
                "type" => filters.kind = ContractKind::parse(value),
                "sort" => filters.sort = SortField::parse(value),
                "order" => filters.order = SortOrder::parse(value),
                _ => {}
            }
        }
        filters
    }

    /// Parse a bare query string (`page=2&search=jita`).
    pub fn from_query_str(query: &str) -> Self {
        Self::from_query_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Extract filters from a full link pasted out of the web app.
    ///
    /// Returns `None` only when the text is not a URL at all; a URL with a
    /// missing or entirely invalid query still yields the defaults.
    pub fn from_link(link: &str) -> Option<Self> {
        let url = Url::parse(link.trim()).ok()?;
        Some(Self::from_query_pairs(url.query_pairs()))
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|parsed| *parsed >= 1)
}
