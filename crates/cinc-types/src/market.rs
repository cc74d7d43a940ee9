//! Market data records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single market quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Last traded price
    pub last_price: Decimal,
    /// Absolute change since the previous close
    pub change: Decimal,
    /// Relative change since the previous close, in percent
    pub change_percent: Decimal,
    pub volume: Decimal,
    pub market_cap: Decimal,
}

/// Aggregate market snapshot returned by `GET /market/data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponse {
    pub markets: Vec<Market>,
    pub total_markets: u64,
    pub total_volume: Decimal,
}

impl MarketResponse {
    /// Find a market by its symbol
    pub fn by_symbol(&self, symbol: &str) -> Option<&Market> {
        self.markets.iter().find(|m| m.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_response_parse() {
        let json = r#"{
            "markets": [{
                "id": "m-1",
                "name": "Bitcoin",
                "symbol": "BTC",
                "lastPrice": 64000.25,
                "change": -120.5,
                "changePercent": -0.19,
                "volume": 1500,
                "marketCap": 1250000000
            }],
            "totalMarkets": 1,
            "totalVolume": 1500
        }"#;

        let response: MarketResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_markets, 1);
        assert_eq!(response.total_volume, dec!(1500));

        let btc = response.by_symbol("BTC").unwrap();
        assert_eq!(btc.last_price, dec!(64000.25));
        assert_eq!(btc.change, dec!(-120.5));
        assert!(response.by_symbol("ETH").is_none());
    }
}
