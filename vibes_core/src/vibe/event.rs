use serde::{Deserialize, Serialize};

use crate::helpers::dto::{CapturedImage, Nft};
use crate::helpers::wallet::WalletAddress;
use crate::vibe::state::VibeError;

/// Every transition the view can make, user-triggered or settlement of an
/// async operation. The settlement variants are produced by the engine, never
/// accepted from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    AddressChanged { address: String },
    Submit,
    FetchSucceeded { address: WalletAddress, nft: Nft },
    FetchFailed { error: VibeError },
    CheckAnother,
    Back,
    HistoryPicked { address: String },
    ShareRequested,
    CaptureSucceeded { image: CapturedImage },
    CaptureFailed,
    ShareConfirmed,
    ShareCancelled,
    PublishSucceeded { share_url: String },
    PublishFailed { message: String },
}
