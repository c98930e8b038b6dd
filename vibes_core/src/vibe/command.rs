use crate::helpers::dto::{CapturedImage, Nft};
use crate::helpers::wallet::WalletAddress;

/// Side effects requested by the reducer. The engine executes them and feeds
/// the resulting settlement events back in.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchCollections { address: WalletAddress },
    CaptureCard { nft: Nft },
    PublishPreview { nft: Nft, image: CapturedImage },
    ComposeShareCast { nft: Nft, share_url: String },
    ComposeFallbackCast { nft: Nft },
    Alert { message: String },
}
