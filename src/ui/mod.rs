//! Interactive terminal front end for browsing contracts.
//!
//! The browser renders a header/search bar, the contract table, and a
//! status footer, all driven by snapshots pulled from a
//! [`ContractSearch`](crate::search::ContractSearch) each frame.

mod actions;
mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use state::{App, UiOptions};
pub use theme::Theme;

use crate::filters::FilterSet;
use crate::types::Contract;

/// Result of an interactive browsing session.
#[derive(Debug, Clone)]
pub struct BrowseOutcome {
    /// False when the session ended with Esc.
    pub accepted: bool,
    /// Filter state at exit.
    pub filters: FilterSet,
    /// Contract highlighted when the session was accepted.
    pub selection: Option<Contract>,
}
