//! Filter model driving contract searches.
//!
//! A [`FilterSet`] is the complete set of query parameters for one listing
//! request. Components never mutate it directly: they describe edits with a
//! [`FilterPatch`] and let the search pipeline react to the merged value.

mod patch;
mod query;

pub use patch::{FilterPatch, Patch};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Contract categories accepted by the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    ItemExchange,
    Auction,
    Courier,
    Loan,
}

impl ContractKind {
    pub const ALL: [ContractKind; 4] = [
        ContractKind::ItemExchange,
        ContractKind::Auction,
        ContractKind::Courier,
        ContractKind::Loan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContractKind::ItemExchange => "item_exchange",
            ContractKind::Auction => "auction",
            ContractKind::Courier => "courier",
            ContractKind::Loan => "loan",
        }
    }

    /// Human-readable label for UI chrome.
    pub fn label(self) -> &'static str {
        match self {
            ContractKind::ItemExchange => "Item Exchange",
            ContractKind::Auction => "Auction",
            ContractKind::Courier => "Courier",
            ContractKind::Loan => "Loan",
        }
    }

    /// Parse a raw parameter value, yielding `None` for anything outside
    /// the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
    }
}

/// Fields the contracts API can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    DateIssued,
    DateExpired,
    Price,
    Collateral,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::DateIssued,
        SortField::DateExpired,
        SortField::Price,
        SortField::Collateral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::DateIssued => "date_issued",
            SortField::DateExpired => "date_expired",
            SortField::Price => "price",
            SortField::Collateral => "collateral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::DateIssued => "Issued",
            SortField::DateExpired => "Expires",
            SortField::Price => "Price",
            SortField::Collateral => "Collateral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim())
    }
}

/// Sort direction for [`SortField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Complete query parameters for one contract listing request.
///
/// Invariants: `page` and `size` are at least 1, and `search` is never an
/// empty string. [`FilterSet::apply`] and the query-parameter constructors
/// re-establish both after every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub page: u32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContractKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            search: None,
            kind: None,
            sort: None,
            order: None,
        }
    }
}

impl FilterSet {
    /// Merge a patch into this set, field by field, then re-establish the
    /// type invariants.
    pub fn apply(&mut self, patch: FilterPatch) {
        let FilterPatch {
            page,
            size,
            search,
            kind,
            sort,
            order,
        } = patch;

        page.apply_required(&mut self.page, DEFAULT_PAGE);
        size.apply_required(&mut self.size, DEFAULT_PAGE_SIZE);
        search.apply_optional(&mut self.search);
        kind.apply_optional(&mut self.kind);
        sort.apply_optional(&mut self.sort);
        order.apply_optional(&mut self.order);

        self.normalize();
    }

    /// Query parameters in wire order. Absent fields are not encoded, and
    /// `sort`/`order` travel only as a pair.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(search) = self.search.as_deref() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let (Some(sort), Some(order)) = (self.sort, self.order) {
            pairs.push(("sort", sort.as_str().to_string()));
            pairs.push(("order", order.as_str().to_string()));
        }
        pairs
    }

    pub(crate) fn normalize(&mut self) {
        if self.page == 0 {
            self.page = DEFAULT_PAGE;
        }
        if self.size == 0 {
            self.size = DEFAULT_PAGE_SIZE;
        }
        if self
            .search
            .as_deref()
            .is_some_and(|text| text.trim().is_empty())
        {
            self.search = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_twenty() {
        let filters = FilterSet::default();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.size, 20);
        assert!(filters.search.is_none());
    }

    #[test]
    fn query_pairs_skip_absent_fields() {
        let filters = FilterSet {
            search: Some("jita".into()),
            ..FilterSet::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("size", "20".to_string()),
                ("search", "jita".to_string()),
            ]
        );
    }

    #[test]
    fn sort_and_order_encode_only_as_a_pair() {
        let mut filters = FilterSet {
            sort: Some(SortField::Price),
            ..FilterSet::default()
        };
        assert!(!filters.query_pairs().iter().any(|(key, _)| *key == "sort"));

        filters.order = Some(SortOrder::Asc);
        let pairs = filters.query_pairs();
        assert!(pairs.contains(&("sort", "price".to_string())));
        assert!(pairs.contains(&("order", "asc".to_string())));

        filters.sort = None;
        assert!(!filters.query_pairs().iter().any(|(key, _)| *key == "order"));
    }

    #[test]
    fn apply_merges_field_by_field() {
        let mut filters = FilterSet::default();
        filters.apply(FilterPatch::new().search("vindicator").page(3));
        assert_eq!(filters.search.as_deref(), Some("vindicator"));
        assert_eq!(filters.page, 3);
        assert_eq!(filters.size, 20);

        filters.apply(FilterPatch::new().kind(ContractKind::Auction));
        assert_eq!(filters.search.as_deref(), Some("vindicator"));
        assert_eq!(filters.kind, Some(ContractKind::Auction));
    }

    #[test]
    fn empty_search_normalizes_to_absent() {
        let mut filters = FilterSet::default();
        filters.apply(FilterPatch::new().search("jita"));
        filters.apply(FilterPatch::new().search(""));
        assert!(filters.search.is_none());
    }

    #[test]
    fn clearing_page_restores_the_default() {
        let mut filters = FilterSet {
            page: 9,
            ..FilterSet::default()
        };
        filters.apply(FilterPatch {
            page: Patch::Clear,
            ..FilterPatch::default()
        });
        assert_eq!(filters.page, DEFAULT_PAGE);
    }

    #[test]
    fn kind_parse_rejects_unknown_tags() {
        assert_eq!(ContractKind::parse("auction"), Some(ContractKind::Auction));
        assert_eq!(ContractKind::parse("freight"), None);
        assert_eq!(SortField::parse("price"), Some(SortField::Price));
        assert_eq!(SortField::parse("volume"), None);
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("descending"), None);
    }
}
