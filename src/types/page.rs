use serde::{Deserialize, Serialize};

use super::Contract;

/// One page of contract search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPage {
    /// Total number of contracts matching the query across all pages.
    pub total: u64,
    /// The page this payload covers, starting at 1.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    pub items: Vec<Contract>,
}

impl ContractPage {
    /// Number of pages needed to cover `total` at the current size.
    ///
    /// A zero size would divide by zero; the listing treats that as a
    /// single page.
    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.size));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
