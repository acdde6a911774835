use std::time::Duration;

use url::Url;

use super::{ContractGateway, GatewayError};
use crate::filters::FilterSet;
use crate::types::ContractPage;

/// Blocking HTTP client for the public contract listing.
pub struct HttpGateway {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl HttpGateway {
    /// Build a gateway rooted at the API base URL (e.g.
    /// `https://api.hangarbay.example/api/v1`).
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, GatewayError> {
        let endpoint = contracts_endpoint(base_url)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hangarbay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    fn request_url(&self, filters: &FilterSet) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(filters.query_pairs());
        url
    }
}

impl ContractGateway for HttpGateway {
    fn fetch(&self, filters: &FilterSet) -> Result<ContractPage, GatewayError> {
        let url = self.request_url(filters);
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status { status });
        }
        Ok(response.json()?)
    }
}

/// Join the listing path onto the base, tolerating bases with and without
/// a trailing slash. `Url::join` would otherwise drop the last path
/// segment of `.../api/v1`.
fn contracts_endpoint(base_url: &Url) -> Result<Url, GatewayError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("contracts/")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{SortField, SortOrder};

    fn gateway_at(base: &str) -> HttpGateway {
        let base = Url::parse(base).expect("base url");
        HttpGateway::new(&base, Duration::from_secs(10)).expect("gateway")
    }

    #[test]
    fn endpoint_preserves_the_base_path() {
        let gateway = gateway_at("http://localhost:8000/api/v1");
        let url = gateway.request_url(&FilterSet::default());
        assert_eq!(url.path(), "/api/v1/contracts/");

        let gateway = gateway_at("http://localhost:8000/api/v1/");
        let url = gateway.request_url(&FilterSet::default());
        assert_eq!(url.path(), "/api/v1/contracts/");
    }

    #[test]
    fn request_url_encodes_only_present_fields() {
        let gateway = gateway_at("http://localhost:8000/api/v1");
        let url = gateway.request_url(&FilterSet {
            page: 3,
            size: 50,
            search: Some("jita".into()),
            ..FilterSet::default()
        });
        assert_eq!(url.query(), Some("page=3&size=50&search=jita"));
    }

    #[test]
    fn request_url_includes_the_sort_pair() {
        let gateway = gateway_at("http://localhost:8000/api/v1");
        let url = gateway.request_url(&FilterSet {
            sort: Some(SortField::Price),
            order: Some(SortOrder::Desc),
            ..FilterSet::default()
        });
        assert_eq!(url.query(), Some("page=1&size=20&sort=price&order=desc"));
    }

    #[test]
    fn search_text_is_percent_encoded() {
        let gateway = gateway_at("http://localhost:8000/api/v1");
        let url = gateway.request_url(&FilterSet {
            search: Some("mega pulse".into()),
            ..FilterSet::default()
        });
        assert_eq!(url.query(), Some("page=1&size=20&search=mega+pulse"));
    }
}
