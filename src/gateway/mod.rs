//! Access to the contracts REST API.
//!
//! The search pipeline talks to a [`ContractGateway`] trait object so that
//! tests can substitute a scripted gateway for the real HTTP transport.

mod http;

pub use http::HttpGateway;

use thiserror::Error;

use crate::filters::FilterSet;
use crate::types::ContractPage;

/// Failure while fetching contracts.
///
/// The `Display` form doubles as the user-facing message surfaced in the
/// status bar, so variants stay short and free of internals.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("contracts API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("contracts API returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
    #[error("invalid contracts endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Read access to the paginated contract listing.
pub trait ContractGateway: Send + Sync {
    /// Fetch the page of contracts described by `filters`.
    ///
    /// Implementations block until the response arrives; the pipeline calls
    /// this from dedicated request threads and discards results that have
    /// been superseded, so no cancellation hook is required here.
    fn fetch(&self, filters: &FilterSet) -> Result<ContractPage, GatewayError>;
}
