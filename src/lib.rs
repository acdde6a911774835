//! Core building blocks for the `hangarbay` contract browser.
//!
//! The root module primarily re-exports the filter model, the search
//! coordinator, and the gateway types so that embedders can drive a
//! contract search without digging through the module hierarchy.

pub mod app_dirs;
pub mod filters;
pub mod format;
pub mod gateway;
pub mod search;
pub mod types;
pub mod ui;

pub use filters::{ContractKind, FilterPatch, FilterSet, Patch, SortField, SortOrder};
pub use gateway::{ContractGateway, GatewayError, HttpGateway};
pub use search::{ContractSearch, FetchState, SearchOptions};
pub use types::{Contract, ContractItem, ContractPage};
pub use ui::{App, BrowseOutcome, UiOptions};
