use thiserror::Error;

use crate::collections::dto::{CollectionEntry, UserCollectionsResponse};
use crate::helpers::wallet::WalletAddress;
use crate::vibe::engine::CollectionsApi;

pub const DEFAULT_COLLECTIONS_API_URL: &str =
    "https://api-mainnet.magiceden.dev/v3/rtp/monad-testnet";

#[derive(Debug, Error)]
pub enum CollectionsError {
    #[error("collections request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("collections API returned status {0}")]
    Status(u16),
}

/// Read-only client for the marketplace collections API.
#[derive(Debug, Clone)]
pub struct CollectionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl CollectionsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

impl CollectionsApi for CollectionsClient {
    /// One GET per lookup, returning the raw entry list. Pagination beyond
    /// the first 100 collections is not requested.
    async fn user_collections(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<CollectionEntry>, CollectionsError> {
        let url = format!(
            "{}/users/{}/collections/v3?includeTopBid=false&includeLiquidCount=false&offset=0&limit=100",
            self.base_url, address
        );

        log::info!("fetching collections for {}", address.short());

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "*/*")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CollectionsError::Status(response.status().as_u16()));
        }

        let body: UserCollectionsResponse = response.json().await?;
        Ok(body.collections)
    }
}
