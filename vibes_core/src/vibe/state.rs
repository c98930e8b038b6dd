use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::helpers::dto::{CapturedImage, Nft};
use crate::vibe::history::AddressHistory;

/// Recoverable, user-facing failures. Each maps to the exact message shown
/// above the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VibeError {
    #[error("Please enter an address")]
    EmptyAddress,
    #[error("Please enter a valid Ethereum address")]
    MalformedAddress,
    #[error("No NFTs found in this collection")]
    NoNfts,
    #[error("No valid NFTs found in this collection")]
    NoUsableNfts,
    #[error("Failed to fetch NFTs. Please check the address and try again.")]
    FetchFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Input,
    Card,
    Preview,
}

/// The whole transient UI state. Mutated only by the reducer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub address: String,
    pub loading: bool,
    pub error: Option<VibeError>,
    pub current: Option<Nft>,
    pub previous: Option<Nft>,
    pub capturing: bool,
    pub preview: Option<CapturedImage>,
    pub history: AddressHistory,
}

impl ViewState {
    /// Which of the three views the state renders as. A pending preview wins
    /// over the card; no current NFT means the input form.
    pub fn screen(&self) -> Screen {
        if self.current.is_some() {
            if self.preview.is_some() {
                Screen::Preview
            } else {
                Screen::Card
            }
        } else {
            Screen::Input
        }
    }
}
