use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single line item attached to a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractItem {
    pub record_id: i64,
    pub type_id: i64,
    pub quantity: i64,
    pub is_included: bool,
    pub is_singleton: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_group_id: Option<i64>,
}

/// Public contract record as served by the contracts API.
///
/// The `kind` field carries the raw contract type string from the wire
/// (`item_exchange`, `auction`, ...) rather than a closed enum so that
/// records with types this build does not know about still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: i64,
    pub issuer_id: i64,
    pub issuer_corporation_id: i64,
    pub start_location_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub for_corporation: bool,
    pub date_issued: DateTime<Utc>,
    pub date_expired: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_corporation_name: Option<String>,
    pub is_ship_contract: bool,
    #[serde(default)]
    pub items: Vec<ContractItem>,
}

impl Contract {
    /// Label used for display: the explicit title when present, otherwise
    /// the first named item, otherwise the contract id.
    pub fn display_title(&self) -> String {
        if let Some(title) = self.title.as_deref()
            && !title.trim().is_empty()
        {
            return title.to_string();
        }
        if let Some(name) = self
            .items
            .iter()
            .find_map(|item| item.type_name.as_deref())
        {
            return name.to_string();
        }
        format!("Contract #{}", self.contract_id)
    }

    /// Location shown in listings, falling back to the raw id.
    pub fn display_location(&self) -> String {
        match self.start_location_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Location {}", self.start_location_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bare_contract() -> Contract {
        Contract {
            contract_id: 42,
            issuer_id: 1001,
            issuer_corporation_id: 2001,
            start_location_id: 60003760,
            end_location_id: None,
            kind: "item_exchange".into(),
            status: "outstanding".into(),
            title: None,
            for_corporation: false,
            date_issued: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            date_expired: Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
            date_completed: None,
            price: None,
            reward: None,
            volume: None,
            start_location_name: None,
            issuer_name: None,
            issuer_corporation_name: None,
            is_ship_contract: true,
            items: Vec::new(),
        }
    }

    #[test]
    fn display_title_prefers_explicit_title() {
        let mut contract = bare_contract();
        contract.title = Some("WTS Vindicator".into());
        assert_eq!(contract.display_title(), "WTS Vindicator");
    }

    #[test]
    fn display_title_falls_back_to_item_then_id() {
        let mut contract = bare_contract();
        assert_eq!(contract.display_title(), "Contract #42");

        contract.items.push(ContractItem {
            record_id: 1,
            type_id: 17740,
            quantity: 1,
            is_included: true,
            is_singleton: false,
            raw_quantity: None,
            type_name: Some("Vindicator".into()),
            category: None,
            market_group_id: None,
        });
        assert_eq!(contract.display_title(), "Vindicator");
    }

    #[test]
    fn deserializes_minimal_record() {
        let payload = r#"{
            "contract_id": 7,
            "issuer_id": 1,
            "issuer_corporation_id": 2,
            "start_location_id": 3,
            "type": "auction",
            "status": "outstanding",
            "for_corporation": false,
            "date_issued": "2024-01-01T00:00:00Z",
            "date_expired": "2024-01-08T00:00:00Z",
            "is_ship_contract": false,
            "items": []
        }"#;

        let contract: Contract = serde_json::from_str(payload).expect("decode");
        assert_eq!(contract.contract_id, 7);
        assert_eq!(contract.kind, "auction");
        assert!(contract.price.is_none());
    }
}
