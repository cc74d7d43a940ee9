//! Market data endpoints

use crate::client::RestClient;
use crate::request::RequestOptions;
use cinc_types::{CincResult, Market, MarketResponse};
use tracing::{debug, instrument};

/// Read-only market data
pub struct MarketService<'a> {
    client: &'a RestClient,
}

impl<'a> MarketService<'a> {
    pub fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Get the market overview with totals
    #[instrument(skip(self))]
    pub async fn get_market_data(&self) -> CincResult<MarketResponse> {
        debug!("Fetching market data");
        self.client.get("/market/data", None).await
    }

    /// Get trending markets
    #[instrument(skip(self))]
    pub async fn get_market_trends(&self) -> CincResult<Vec<Market>> {
        debug!("Fetching market trends");
        self.client.get("/market/trends", None).await
    }

    /// Get a single market
    #[instrument(skip(self))]
    pub async fn get_market_by_id(&self, market_id: &str) -> CincResult<Market> {
        self.client.get(&format!("/market/{}", market_id), None).await
    }

    /// Search markets by free text
    ///
    /// The query is URL-encoded, so it may contain spaces or `&`.
    #[instrument(skip(self))]
    pub async fn search_markets(&self, query: &str) -> CincResult<Vec<Market>> {
        debug!("Searching markets");
        let options = RequestOptions::new().with_query("query", query);
        self.client.get("/market/search", Some(&options)).await
    }
}
