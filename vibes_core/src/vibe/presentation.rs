use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::helpers::dto::{Nft, NftAttribute};
use crate::vibe::roasts::roast_message;

/// Magnitude band edges, in absolute percentage points. Values at or above
/// the last edge land in the deepest band.
const BAND_EDGES: [f64; 4] = [10.0, 20.0, 30.0, 50.0];

/// Full-card gradient stops per band, green spectrum for non-negative and red
/// spectrum for negative 7-day change.
const POSITIVE_GRADIENTS: [[&str; 3]; 5] = [
    ["#15803d", "#059669", "#14b8a6"],
    ["#166534", "#047857", "#0d9488"],
    ["#14532d", "#065f46", "#0f766e"],
    ["#052e16", "#064e3b", "#115e59"],
    ["#052e16", "#022c22", "#134e4a"],
];

const NEGATIVE_GRADIENTS: [[&str; 3]; 5] = [
    ["#b91c1c", "#e11d48", "#ec4899"],
    ["#991b1b", "#be123c", "#db2777"],
    ["#7f1d1d", "#9f1239", "#be185d"],
    ["#450a0a", "#881337", "#9d174d"],
    ["#450a0a", "#4c0519", "#831843"],
];

/// Neutral slate gradient for an absent value.
const NO_DATA_GRADIENT: [&str; 3] = ["#111827", "#1f2937", "#374151"];

/// Per-metric background tints, light green/red ramps plus a neutral gray.
const POSITIVE_TINTS: [&str; 5] = ["#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80"];
const NEGATIVE_TINTS: [&str; 5] = ["#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171"];
const NO_DATA_TINT: &str = "#f3f4f6";

/// Padding around the captured card and the fills one of which is picked at
/// random for the composite background.
pub const CAPTURE_PADDING: u32 = 25;
pub const CAPTURE_BACKGROUNDS: [&str; 5] =
    ["#fffbe6", "#e0e7ff", "#ffe4fa", "#e0ffe4", "#f3e8ff"];

fn band(percentage: f64) -> usize {
    BAND_EDGES.iter().position(|edge| percentage < *edge).unwrap_or(BAND_EDGES.len())
}

/// Background gradient stops for a 7-day volume change. Zero counts as
/// non-negative.
pub fn background_gradient(volume_change: Option<f64>) -> [&'static str; 3] {
    match volume_change {
        None => NO_DATA_GRADIENT,
        Some(value) => {
            let index = band((value * 100.0).abs());
            if value >= 0.0 {
                POSITIVE_GRADIENTS[index]
            } else {
                NEGATIVE_GRADIENTS[index]
            }
        }
    }
}

/// Tint behind a single metric cell, banded the same way as the gradient.
pub fn metric_tint(value: Option<f64>) -> &'static str {
    match value {
        None => NO_DATA_TINT,
        Some(value) => {
            let index = band((value * 100.0).abs());
            if value >= 0.0 {
                POSITIVE_TINTS[index]
            } else {
                NEGATIVE_TINTS[index]
            }
        }
    }
}

/// Formats a fractional ratio as a percentage with exactly two decimals, or
/// the fixed placeholder when absent.
pub fn format_volume_change(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => "N/A".to_string(),
    }
}

pub fn pick_background<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CAPTURE_BACKGROUNDS[rng.gen_range(0..CAPTURE_BACKGROUNDS.len())]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricCell {
    pub value: String,
    pub tint: String,
}

/// Everything a renderer needs to draw the card; derived entirely from the
/// NFT's 7-day volume change and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NftCard {
    pub name: String,
    pub image: String,
    pub description: String,
    pub attributes: Vec<NftAttribute>,
    pub background: Vec<String>,
    pub positive: bool,
    pub seven_day: String,
    pub roast: String,
    pub one_day: MetricCell,
    pub thirty_day: MetricCell,
}

impl NftCard {
    pub fn from_nft(nft: &Nft) -> Self {
        let seven_day = nft.volume_change.seven_day;
        Self {
            name: nft.name.clone(),
            image: nft.image.clone(),
            description: nft.description.clone(),
            attributes: nft.attributes.clone(),
            background: background_gradient(seven_day)
                .iter()
                .map(|stop| stop.to_string())
                .collect(),
            positive: seven_day.is_some_and(|value| value >= 0.0),
            seven_day: format_volume_change(seven_day),
            roast: roast_message(seven_day).to_string(),
            one_day: MetricCell {
                value: format_volume_change(nft.volume_change.one_day),
                tint: metric_tint(nft.volume_change.one_day).to_string(),
            },
            thirty_day: MetricCell {
                value: format_volume_change(nft.volume_change.thirty_day),
                tint: metric_tint(nft.volume_change.thirty_day).to_string(),
            },
        }
    }
}
