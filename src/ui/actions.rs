use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filters::{ContractKind, FilterPatch, SortField, SortOrder};

use super::state::App;
use super::BrowseOutcome;

impl App {
    /// Translate one key press into state changes, returning an outcome
    /// when the session should end.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Some(self.outcome(false)),
                KeyCode::Char('s') => self.cycle_sort(),
                KeyCode::Char('o') => self.toggle_order(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(self.outcome(false)),
            KeyCode::Enter => return Some(self.outcome(true)),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.change_page(-1),
            KeyCode::PageDown => self.change_page(1),
            KeyCode::Tab => self.cycle_kind(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Backspace => {
                if self.input.backspace() {
                    self.submit_search();
                }
            }
            KeyCode::Delete => {
                if self.input.delete() {
                    self.submit_search();
                }
            }
            KeyCode::Char(ch) => {
                self.input.insert(ch);
                self.submit_search();
            }
            _ => {}
        }
        None
    }

    /// Push the current input text into the filters. New searches always
    /// restart at page 1 so the result window doesn't dangle past the end
    /// of a smaller result set.
    fn submit_search(&mut self) {
        self.search
            .update_filters(FilterPatch::new().search(self.input.text()).page(1));
    }

    fn change_page(&mut self, delta: i64) {
        let total_pages = self
            .fetch
            .data
            .as_ref()
            .map(|page| page.total_pages())
            .unwrap_or(1);
        // Read the live filter value, not the per-frame snapshot, so two
        // presses inside one frame advance twice.
        let current = i64::from(self.search.filters().page);
        let target = (current + delta).clamp(1, i64::from(total_pages));
        if target != current {
            self.search
                .update_filters(FilterPatch::new().page(target as u32));
        }
    }

    fn cycle_kind(&mut self) {
        let patch = match next_kind(self.search.filters().kind) {
            Some(kind) => FilterPatch::new().kind(kind).page(1),
            None => FilterPatch::new().any_kind().page(1),
        };
        self.search.update_filters(patch);
    }

    fn cycle_sort(&mut self) {
        let current = self.search.filters();
        let patch = match next_sort(current.sort) {
            Some(field) => {
                let order = current.order.unwrap_or(SortOrder::Desc);
                FilterPatch::new().sort(field).order(order).page(1)
            }
            None => FilterPatch::new().unsorted().page(1),
        };
        self.search.update_filters(patch);
    }

    fn toggle_order(&mut self) {
        let Some(order) = self.search.filters().order else {
            return;
        };
        self.search
            .update_filters(FilterPatch::new().order(order.toggled()).page(1));
    }
}

fn next_kind(current: Option<ContractKind>) -> Option<ContractKind> {
    match current {
        None => Some(ContractKind::ALL[0]),
        Some(kind) => {
            let index = ContractKind::ALL.iter().position(|k| *k == kind)?;
            ContractKind::ALL.get(index + 1).copied()
        }
    }
}

fn next_sort(current: Option<SortField>) -> Option<SortField> {
    match current {
        None => Some(SortField::ALL[0]),
        Some(field) => {
            let index = SortField::ALL.iter().position(|f| *f == field)?;
            SortField::ALL.get(index + 1).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_cycle_covers_every_tag_then_wraps_to_any() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..ContractKind::ALL.len() {
            current = next_kind(current);
            seen.push(current.expect("kind"));
        }
        assert_eq!(seen, ContractKind::ALL);
        assert_eq!(next_kind(current), None);
    }

    #[test]
    fn sort_cycle_ends_back_at_unsorted() {
        let mut current = None;
        for _ in 0..SortField::ALL.len() {
            current = next_sort(current);
            assert!(current.is_some());
        }
        assert_eq!(next_sort(current), None);
    }
}
