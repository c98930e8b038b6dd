use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One collection-level NFT record as shown to the user. Immutable once
/// fetched; at most one is "current" at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nft {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<NftAttribute>,
    pub volume_change: VolumeChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: String,
}

/// Signed fractional trading-volume change per lookback window. `None`
/// means the marketplace reported no data for that window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VolumeChange {
    #[serde(rename = "1day")]
    pub one_day: Option<f64>,
    #[serde(rename = "7day")]
    pub seven_day: Option<f64>,
    #[serde(rename = "30day")]
    pub thirty_day: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressHistoryEntry {
    pub address: String,
    pub timestamp: i64,
}

/// A composed cast handed to the host for dispatch. The intent URL is the
/// navigation fallback for hosts that cannot call the compose action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CastDraft {
    pub text: String,
    pub embeds: Vec<String>,
    pub intent_url: String,
}

/// Framing passed to the capture renderer: padding around the card and the
/// background fill it is composited onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaptureFrame {
    pub padding: u32,
    pub background: String,
}

/// A captured card image, carried as a PNG data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CapturedImage {
    pub data_url: String,
}

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

impl CapturedImage {
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        let encoded = general_purpose::STANDARD.encode(bytes);
        Self {
            data_url: format!("{PNG_DATA_URL_PREFIX}{encoded}"),
        }
    }

    /// Decodes the data URL back into raw PNG bytes.
    pub fn png_bytes(&self) -> Option<Vec<u8>> {
        let encoded = self.data_url.strip_prefix(PNG_DATA_URL_PREFIX)?;
        general_purpose::STANDARD.decode(encoded).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_image_round_trip() {
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a];
        let image = CapturedImage::from_png_bytes(&bytes);
        assert!(image.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(image.png_bytes(), Some(bytes));
    }

    #[test]
    fn test_png_bytes_rejects_foreign_data_url() {
        let image = CapturedImage {
            data_url: "data:image/jpeg;base64,AAAA".to_string(),
        };
        assert_eq!(image.png_bytes(), None);
    }

    #[test]
    fn test_volume_change_window_keys() {
        let parsed: VolumeChange =
            serde_json::from_str(r#"{"1day":0.05,"7day":-0.12,"30day":null}"#).unwrap();
        assert_eq!(parsed.one_day, Some(0.05));
        assert_eq!(parsed.seven_day, Some(-0.12));
        assert_eq!(parsed.thirty_day, None);
    }
}
