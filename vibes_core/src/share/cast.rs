use crate::helpers::dto::{CastDraft, Nft};
use crate::vibe::presentation::format_volume_change;
use crate::vibe::roasts::roast_message;

pub const APP_TITLE: &str = "Monad Vibes";

const COMPOSE_INTENT_BASE: &str = "https://warpcast.com/~/compose";

fn performance_lines(nft: &Nft) -> String {
    format!(
        "\u{1f3a8} {APP_TITLE}: {}\n\n\u{1f4c8} 7-Day Performance: {}\n\n{}",
        nft.name,
        format_volume_change(nft.volume_change.seven_day),
        roast_message(nft.volume_change.seven_day)
    )
}

/// Cast body for the full share flow.
pub fn share_text(nft: &Nft) -> String {
    format!(
        "{}\n\nThink you can find a better NFT? Challenge accepted! \u{1f680}",
        performance_lines(nft)
    )
}

/// Cast body for the degraded, image-less share.
pub fn fallback_text(nft: &Nft) -> String {
    format!("{}\n\nCheck it out!", performance_lines(nft))
}

/// Share-page link that carries the pinned image for feed embeds.
pub fn share_page_url(app_url: &str, image_url: &str) -> String {
    format!("{}/share?img={}", app_url, urlencoding::encode(image_url))
}

/// Prebuilt compose intent for hosts that navigate instead of invoking the
/// compose action directly.
pub fn compose_intent_url(text: &str, embed: &str) -> String {
    format!(
        "{COMPOSE_INTENT_BASE}?text={}&embeds[]={}",
        urlencoding::encode(text),
        urlencoding::encode(embed)
    )
}

fn draft(text: String, embed: String) -> CastDraft {
    let intent_url = compose_intent_url(&text, &embed);
    CastDraft {
        text,
        embeds: vec![embed],
        intent_url,
    }
}

/// Draft for a successfully pinned preview, embedding the share page.
pub fn share_draft(nft: &Nft, share_url: &str) -> CastDraft {
    draft(share_text(nft), share_url.to_string())
}

/// Text-only fallback draft, embedding the app itself.
pub fn fallback_draft(nft: &Nft, app_url: &str) -> CastDraft {
    draft(fallback_text(nft), app_url.to_string())
}
