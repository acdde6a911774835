use super::{ContractKind, SortField, SortOrder};

/// Edit to a single filter field.
///
/// `Keep` leaves the current value untouched, `Set` overwrites it, and
/// `Clear` drops it back to its default (required fields) or removes it
/// (optional fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Set(T),
    Clear,
}

// Not derived: the derive would demand `T: Default` even though `Keep`
// carries no value.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    pub(super) fn apply_required(self, slot: &mut T, default: T) {
        match self {
            Patch::Keep => {}
            Patch::Set(value) => *slot = value,
            Patch::Clear => *slot = default,
        }
    }

    pub(super) fn apply_optional(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Set(value) => *slot = Some(value),
            Patch::Clear => *slot = None,
        }
    }
}

/// Field-level edit merged into the current [`FilterSet`] by
/// [`FilterSet::apply`]. Untouched fields keep their prior value, so an
/// all-`Keep` patch is a no-op.
///
/// [`FilterSet`]: super::FilterSet
/// [`FilterSet::apply`]: super::FilterSet::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub page: Patch<u32>,
    pub size: Patch<u32>,
    pub search: Patch<String>,
    pub kind: Patch<ContractKind>,
    pub sort: Patch<SortField>,
    pub order: Patch<SortOrder>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field is `Keep`.
    pub fn is_empty(&self) -> bool {
        self.page.is_keep()
            && self.size.is_keep()
            && self.search.is_keep()
            && self.kind.is_keep()
            && self.sort.is_keep()
            && self.order.is_keep()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Patch::Set(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Patch::Set(size);
        self
    }

    /// Set the search text. Empty or whitespace-only text clears the field
    /// instead, matching what the listing endpoint expects.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() {
            Patch::Clear
        } else {
            Patch::Set(text)
        };
        self
    }

    pub fn kind(mut self, kind: ContractKind) -> Self {
        self.kind = Patch::Set(kind);
        self
    }

    pub fn any_kind(mut self) -> Self {
        self.kind = Patch::Clear;
        self
    }

    pub fn sort(mut self, field: SortField) -> Self {
        self.sort = Patch::Set(field);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Patch::Set(order);
        self
    }

    pub fn unsorted(mut self) -> Self {
        self.sort = Patch::Clear;
        self.order = Patch::Clear;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(FilterPatch::new().is_empty());
        assert!(!FilterPatch::new().page(2).is_empty());
    }

    #[test]
    fn blank_search_text_becomes_clear() {
        let patch = FilterPatch::new().search("   ");
        assert_eq!(patch.search, Patch::Clear);

        let patch = FilterPatch::new().search("jita");
        assert_eq!(patch.search, Patch::Set("jita".into()));
    }

    #[test]
    fn unsorted_clears_both_halves_of_the_pair() {
        let patch = FilterPatch::new().unsorted();
        assert_eq!(patch.sort, Patch::Clear);
        assert_eq!(patch.order, Patch::Clear);
    }
}
