use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::filters::FilterSet;
use crate::search::{ContractSearch, FetchState};
use crate::types::Contract;

use super::input::SearchInput;
use super::{BrowseOutcome, Theme};

/// Presentation options for the browser shell.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub title: String,
    pub theme: Theme,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            title: "HangarBay".to_string(),
            theme: Theme::default(),
        }
    }
}

/// Top-level state of the interactive browser.
///
/// Holds the coordinator handle plus the per-frame snapshots pulled from
/// it, so rendering and key handling work off a consistent view.
pub struct App {
    pub(crate) search: ContractSearch,
    pub(crate) input: SearchInput,
    pub(crate) table: TableState,
    pub(crate) throbber: ThrobberState,
    pub(crate) theme: Theme,
    pub(crate) title: String,
    pub(crate) fetch: FetchState,
    pub(crate) filters: FilterSet,
}

impl App {
    pub fn new(search: ContractSearch, options: UiOptions) -> Self {
        let filters = search.filters();
        let input = SearchInput::with_text(filters.search.clone().unwrap_or_default());
        let mut table = TableState::default();
        table.select(Some(0));

        Self {
            search,
            input,
            table,
            throbber: ThrobberState::default(),
            theme: options.theme,
            title: options.title,
            fetch: FetchState::default(),
            filters,
        }
    }

    /// Pull fresh snapshots out of the coordinator and keep the selection
    /// inside the new result list.
    pub(crate) fn pump_search_state(&mut self) {
        self.fetch = self.search.state();
        self.filters = self.search.filters();
        self.ensure_selection();
    }

    pub(crate) fn contracts(&self) -> &[Contract] {
        self.fetch
            .data
            .as_ref()
            .map(|page| page.items.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn ensure_selection(&mut self) {
        let len = self.contracts().len();
        if len == 0 {
            self.table.select(None);
            return;
        }
        match self.table.selected() {
            Some(index) if index < len => {}
            _ => self.table.select(Some(0)),
        }
    }

    pub(crate) fn move_selection(&mut self, delta: i64) {
        let len = self.contracts().len();
        if len == 0 {
            return;
        }
        let current = self.table.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        self.table.select(Some(next as usize));
    }

    pub(crate) fn selected_contract(&self) -> Option<Contract> {
        let index = self.table.selected()?;
        self.contracts().get(index).cloned()
    }

    pub(crate) fn outcome(&self, accepted: bool) -> BrowseOutcome {
        BrowseOutcome {
            accepted,
            filters: self.filters.clone(),
            selection: if accepted {
                self.selected_contract()
            } else {
                None
            },
        }
    }
}
