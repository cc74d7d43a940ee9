//! Asset endpoints

use crate::client::RestClient;
use cinc_types::{Asset, CincResult};
use serde_json::Value;
use tracing::{debug, instrument};

/// CRUD over `/assets`
pub struct AssetService<'a> {
    client: &'a RestClient,
}

impl<'a> AssetService<'a> {
    pub fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List all assets
    #[instrument(skip(self))]
    pub async fn get_assets(&self) -> CincResult<Vec<Asset>> {
        debug!("Fetching assets");
        self.client.get("/assets", None).await
    }

    /// Get a single asset
    #[instrument(skip(self))]
    pub async fn get_asset_by_id(&self, asset_id: &str) -> CincResult<Asset> {
        self.client.get(&format!("/assets/{}", asset_id), None).await
    }

    /// Create an asset, returning the stored record
    #[instrument(skip(self, asset), fields(name = %asset.name))]
    pub async fn create_asset(&self, asset: &Asset) -> CincResult<Asset> {
        debug!("Creating asset");
        self.client.post("/assets", Some(asset), None).await
    }

    /// Replace an asset, returning the stored record
    #[instrument(skip(self, asset))]
    pub async fn update_asset(&self, asset_id: &str, asset: &Asset) -> CincResult<Asset> {
        debug!("Updating asset");
        self.client
            .put(&format!("/assets/{}", asset_id), Some(asset), None)
            .await
    }

    /// Delete an asset
    #[instrument(skip(self))]
    pub async fn delete_asset(&self, asset_id: &str) -> CincResult<()> {
        debug!("Deleting asset");
        let _: Value = self
            .client
            .delete(&format!("/assets/{}", asset_id), None)
            .await?;
        Ok(())
    }
}
