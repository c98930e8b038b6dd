use reqwest::multipart;
use serde::Deserialize;
use uuid::Uuid;

use crate::helpers::dto::CapturedImage;
use crate::media::PinError;
use crate::vibe::engine::ImagePinner;

pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud";
pub const DEFAULT_PINATA_GATEWAY: &str = "https://gateway.pinata.cloud/ipfs";

#[derive(Debug, Deserialize)]
struct PinFileResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Pins captured card images to IPFS through Pinata and returns the gateway
/// URL of the pinned file.
#[derive(Debug, Clone)]
pub struct PinataClient {
    http: reqwest::Client,
    api_url: String,
    gateway_url: String,
    jwt: String,
}

impl PinataClient {
    pub fn new(jwt: String) -> Self {
        Self::with_api_url(jwt, DEFAULT_PINATA_API_URL.to_string())
    }

    pub fn with_api_url(jwt: String, api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            gateway_url: DEFAULT_PINATA_GATEWAY.to_string(),
            jwt,
        }
    }

    pub async fn pin_png(&self, bytes: Vec<u8>) -> Result<String, PinError> {
        let filename = format!("monad-vibes-{}.png", Uuid::new_v4());
        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str("image/png")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/pinning/pinFileToIPFS", self.api_url))
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PinError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        let body: PinFileResponse = response.json().await?;
        log::info!("pinned capture as {}", body.ipfs_hash);
        Ok(format!("{}/{}", self.gateway_url, body.ipfs_hash))
    }
}

impl ImagePinner for PinataClient {
    async fn pin_image(&self, image: &CapturedImage) -> Result<String, PinError> {
        let bytes = image.png_bytes().ok_or(PinError::InvalidImage)?;
        self.pin_png(bytes).await
    }
}
