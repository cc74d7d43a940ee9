//! Portfolio records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A position held inside a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAsset {
    pub id: String,
    pub name: String,
    pub quantity: Decimal,
    pub value: Decimal,
}

/// A user's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub assets: Vec<PortfolioAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Portfolio {
    /// Create an empty portfolio for a user
    pub fn new(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            assets: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Add a position
    pub fn with_asset(mut self, asset: PortfolioAsset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Sum of the value of every position
    pub fn total_value(&self) -> Decimal {
        self.assets.iter().map(|a| a.value).sum()
    }
}

/// Envelope returned by single-portfolio endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResponse {
    pub portfolio: Portfolio,
    #[serde(default)]
    pub message: String,
}

/// Envelope for endpoints returning several portfolios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioListResponse {
    pub portfolios: Vec<Portfolio>,
    #[serde(default)]
    pub message: String,
}
