//! Asset records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An asset tracked by the CINC API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Asset type (e.g., "property", "equity")
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Current valuation
    pub value: Decimal,
    /// ISO currency code of `value`
    pub currency: String,
    /// Creation time, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Create an asset without server-assigned timestamps
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_type: impl Into<String>,
        value: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset_type: asset_type.into(),
            value,
            currency: currency.into(),
            created_at: None,
            updated_at: None,
        }
    }
}
