use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Domain-association proof the host verifies before trusting the mini-app.
const ACCOUNT_ASSOCIATION_HEADER: &str = "eyJmaWQiOjI0OTcwMiwidHlwZSI6ImN1c3RvZHkiLCJrZXkiOiIweEVCNDRFYTBlODBhQzE4MjIwREM5RjY0MjEyRWI3OTAwMzAwMTAxNjUifQ";
const ACCOUNT_ASSOCIATION_PAYLOAD: &str = "eyJkb21haW4iOiJtb25hZC12aWJlcy1zZGYudmVyY2VsLmFwcCJ9";
const ACCOUNT_ASSOCIATION_SIGNATURE: &str = "MHhmYTczY2M3NWI2NTA3YjJmNWUzYmQ3N2M0MDg3MjY4YmQwYjQ1MzUwN2QyNmJmNzdmNWUyZjEwNDA3OTFhN2E5MmZmOGYwNTdiNGE2YWE4ZDE2NmEwNjgwNDc4ZTc1NWVjNzUxYTdjYmVjNDNjNDI5MjFkNWNlNDYzMzFlNmI1YzFj";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MiniAppManifest {
    #[serde(rename = "accountAssociation")]
    pub account_association: AccountAssociation,
    pub frame: FrameManifest,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountAssociation {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameManifest {
    pub version: String,
    pub name: String,
    pub icon_url: String,
    pub home_url: String,
    pub image_url: String,
    pub screenshot_urls: Vec<String>,
    pub tags: Vec<String>,
    pub primary_category: String,
    pub button_title: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
    pub webhook_url: String,
}

impl MiniAppManifest {
    /// The fixed descriptor; only `app_url` varies, nothing request-derived.
    pub fn for_app_url(app_url: &str) -> Self {
        Self {
            account_association: AccountAssociation {
                header: ACCOUNT_ASSOCIATION_HEADER.to_string(),
                payload: ACCOUNT_ASSOCIATION_PAYLOAD.to_string(),
                signature: ACCOUNT_ASSOCIATION_SIGNATURE.to_string(),
            },
            frame: FrameManifest {
                version: "1".to_string(),
                name: "Monad Vibe".to_string(),
                icon_url: format!("{app_url}/images/icon.png"),
                home_url: app_url.to_string(),
                image_url: format!("{app_url}/images/feed.png"),
                screenshot_urls: vec![],
                tags: vec![
                    "monad".to_string(),
                    "farcaster".to_string(),
                    "miniapp".to_string(),
                ],
                primary_category: "social".to_string(),
                button_title: "Join the Vibe".to_string(),
                splash_image_url: format!("{app_url}/images/splash.png"),
                splash_background_color: "#ffffff".to_string(),
                webhook_url: format!("{app_url}/api/webhook"),
            },
        }
    }
}
