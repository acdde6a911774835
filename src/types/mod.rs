//! Wire-level records exchanged with the contracts API.

mod contract;
mod page;

pub use contract::{Contract, ContractItem};
pub use page::ContractPage;
