use std::collections::VecDeque;
use std::future::Future;

use rand::Rng;
use thiserror::Error;

use crate::collections::client::CollectionsError;
use crate::collections::dto::CollectionEntry;
use crate::helpers::dto::{CaptureFrame, CapturedImage, CastDraft};
use crate::helpers::wallet::WalletAddress;
use crate::media::PinError;
use crate::share::cast::{fallback_draft, share_draft, share_page_url};
use crate::vibe::command::Command;
use crate::vibe::event::Event;
use crate::vibe::presentation::{CAPTURE_PADDING, NftCard, pick_background};
use crate::vibe::reducer::reduce;
use crate::vibe::selection::select_nft;
use crate::vibe::state::{VibeError, ViewState};

#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("capture renderer is not configured")]
    Unconfigured,
    #[error("capture renderer failed: {0}")]
    Renderer(String),
}

/// The marketplace lookup, as the engine sees it.
pub trait CollectionsApi {
    fn user_collections(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<Vec<CollectionEntry>, CollectionsError>> + Send;
}

/// Renders and composites the card screenshot. Opaque to the engine.
pub trait CardCapturer {
    fn capture(
        &self,
        card: &NftCard,
        frame: &CaptureFrame,
    ) -> impl Future<Output = Result<CapturedImage, CaptureError>> + Send;
}

/// Pins a captured image to the content store and returns its public URL.
pub trait ImagePinner {
    fn pin_image(
        &self,
        image: &CapturedImage,
    ) -> impl Future<Output = Result<String, PinError>> + Send;
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub app_url: String,
}

/// What one dispatched event produced besides state changes: casts handed to
/// the host and alerts to surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOutcome {
    pub casts: Vec<CastDraft>,
    pub alerts: Vec<String>,
}

/// Drives the reducer: executes the commands it emits against the external
/// collaborators and feeds settlement events back in until the state is
/// quiescent. Async operations are awaited inline, so the in-flight flags in
/// the state are true exactly across the corresponding await.
pub struct Engine<C, K, P, R> {
    collections: C,
    capturer: K,
    pinner: P,
    rng: R,
    config: EngineConfig,
}

impl<C, K, P, R> Engine<C, K, P, R>
where
    C: CollectionsApi,
    K: CardCapturer,
    P: ImagePinner,
    R: Rng,
{
    pub fn new(collections: C, capturer: K, pinner: P, rng: R, config: EngineConfig) -> Self {
        Self {
            collections,
            capturer,
            pinner,
            rng,
            config,
        }
    }

    pub async fn dispatch(&mut self, state: &mut ViewState, event: Event) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            for command in reduce(state, event) {
                if let Some(settlement) = self.run(command, &mut outcome).await {
                    queue.push_back(settlement);
                }
            }
        }

        outcome
    }

    async fn run(&mut self, command: Command, outcome: &mut DispatchOutcome) -> Option<Event> {
        match command {
            Command::FetchCollections { address } => Some(self.fetch(address).await),
            Command::CaptureCard { nft } => {
                let frame = CaptureFrame {
                    padding: CAPTURE_PADDING,
                    background: pick_background(&mut self.rng).to_string(),
                };
                let card = NftCard::from_nft(&nft);
                match self.capturer.capture(&card, &frame).await {
                    Ok(image) => Some(Event::CaptureSucceeded { image }),
                    Err(err) => {
                        log::warn!("capture failed, falling back to plain share: {err}");
                        Some(Event::CaptureFailed)
                    }
                }
            }
            Command::PublishPreview { image, .. } => match self.pinner.pin_image(&image).await {
                Ok(image_url) => Some(Event::PublishSucceeded {
                    share_url: share_page_url(&self.config.app_url, &image_url),
                }),
                Err(err) => {
                    log::warn!("pinning failed, falling back to plain share: {err}");
                    Some(Event::PublishFailed {
                        message: err.to_string(),
                    })
                }
            },
            Command::ComposeShareCast { nft, share_url } => {
                outcome.casts.push(share_draft(&nft, &share_url));
                None
            }
            Command::ComposeFallbackCast { nft } => {
                outcome
                    .casts
                    .push(fallback_draft(&nft, &self.config.app_url));
                None
            }
            Command::Alert { message } => {
                outcome.alerts.push(message);
                None
            }
        }
    }

    async fn fetch(&mut self, address: WalletAddress) -> Event {
        match self.collections.user_collections(&address).await {
            Ok(entries) => {
                if entries.is_empty() {
                    return Event::FetchFailed {
                        error: VibeError::NoNfts,
                    };
                }
                match select_nft(&entries, &mut self.rng) {
                    Some(nft) => Event::FetchSucceeded { address, nft },
                    None => Event::FetchFailed {
                        error: VibeError::NoUsableNfts,
                    },
                }
            }
            Err(err) => {
                log::error!("failed to fetch collections: {err}");
                Event::FetchFailed {
                    error: VibeError::FetchFailed,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";
    const APP_URL: &str = "https://vibes.example";

    #[derive(Clone)]
    enum StubCollections {
        Entries(Vec<CollectionEntry>),
        Failing,
    }

    impl CollectionsApi for StubCollections {
        async fn user_collections(
            &self,
            _address: &WalletAddress,
        ) -> Result<Vec<CollectionEntry>, CollectionsError> {
            match self {
                StubCollections::Entries(entries) => Ok(entries.clone()),
                StubCollections::Failing => Err(CollectionsError::Status(500)),
            }
        }
    }

    struct StubCapturer {
        fail: bool,
    }

    impl CardCapturer for StubCapturer {
        async fn capture(
            &self,
            _card: &NftCard,
            frame: &CaptureFrame,
        ) -> Result<CapturedImage, CaptureError> {
            assert_eq!(frame.padding, CAPTURE_PADDING);
            assert!(
                crate::vibe::presentation::CAPTURE_BACKGROUNDS
                    .contains(&frame.background.as_str())
            );
            if self.fail {
                Err(CaptureError::Renderer("renderer down".to_string()))
            } else {
                Ok(CapturedImage::from_png_bytes(b"card"))
            }
        }
    }

    struct StubPinner {
        fail: bool,
    }

    impl ImagePinner for StubPinner {
        async fn pin_image(&self, _image: &CapturedImage) -> Result<String, PinError> {
            if self.fail {
                Err(PinError::Status {
                    status: 500,
                    message: "Internal Server Error".to_string(),
                })
            } else {
                Ok("https://gateway.pinata.cloud/ipfs/Qm123".to_string())
            }
        }
    }

    fn entry(id: &str, image: Option<&str>) -> CollectionEntry {
        let image = match image {
            Some(image) => format!(r#""{image}""#),
            None => "null".to_string(),
        };
        serde_json::from_str(&format!(
            r#"{{"collection": {{"id": "{id}", "name": "{id}", "image": {image}}}}}"#
        ))
        .unwrap()
    }

    fn engine(
        collections: StubCollections,
        capturer: StubCapturer,
        pinner: StubPinner,
    ) -> Engine<StubCollections, StubCapturer, StubPinner, StdRng> {
        Engine::new(
            collections,
            capturer,
            pinner,
            StdRng::seed_from_u64(3),
            EngineConfig {
                app_url: APP_URL.to_string(),
            },
        )
    }

    fn submitted_state() -> ViewState {
        ViewState {
            address: ADDRESS.to_string(),
            ..ViewState::default()
        }
    }

    #[tokio::test]
    async fn test_submit_fetches_selects_and_records_history() {
        let collections = StubCollections::Entries(vec![
            entry("a", None),
            entry("b", Some("https://img/b.png")),
        ]);
        let mut engine = engine(
            collections,
            StubCapturer { fail: false },
            StubPinner { fail: false },
        );
        let mut state = submitted_state();

        let outcome = engine.dispatch(&mut state, Event::Submit).await;

        assert!(outcome.casts.is_empty());
        assert!(!state.loading);
        assert_eq!(state.current.as_ref().unwrap().id, "b");
        assert_eq!(state.history.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_collection_surfaces_no_nfts() {
        let mut engine = engine(
            StubCollections::Entries(vec![]),
            StubCapturer { fail: false },
            StubPinner { fail: false },
        );
        let mut state = submitted_state();

        engine.dispatch(&mut state, Event::Submit).await;
        assert_eq!(state.error, Some(VibeError::NoNfts));
        assert!(state.history.is_empty());
    }

    #[tokio::test]
    async fn test_imageless_collection_surfaces_no_usable_nfts() {
        let mut engine = engine(
            StubCollections::Entries(vec![entry("a", None), entry("b", Some(""))]),
            StubCapturer { fail: false },
            StubPinner { fail: false },
        );
        let mut state = submitted_state();

        engine.dispatch(&mut state, Event::Submit).await;
        assert_eq!(state.error, Some(VibeError::NoUsableNfts));
    }

    #[tokio::test]
    async fn test_api_failure_surfaces_fetch_failed() {
        let mut engine = engine(
            StubCollections::Failing,
            StubCapturer { fail: false },
            StubPinner { fail: false },
        );
        let mut state = submitted_state();

        engine.dispatch(&mut state, Event::Submit).await;
        assert_eq!(state.error, Some(VibeError::FetchFailed));
    }

    #[tokio::test]
    async fn test_full_share_flow_pins_and_casts_share_url() {
        let collections = StubCollections::Entries(vec![entry("b", Some("https://img/b.png"))]);
        let mut engine = engine(
            collections,
            StubCapturer { fail: false },
            StubPinner { fail: false },
        );
        let mut state = submitted_state();
        engine.dispatch(&mut state, Event::Submit).await;

        let outcome = engine.dispatch(&mut state, Event::ShareRequested).await;
        assert!(outcome.casts.is_empty());
        assert!(state.preview.is_some());
        assert!(!state.capturing);

        let outcome = engine.dispatch(&mut state, Event::ShareConfirmed).await;
        assert_eq!(outcome.casts.len(), 1);
        assert!(outcome.alerts.is_empty());
        assert_eq!(
            outcome.casts[0].embeds,
            vec![
                "https://vibes.example/share?img=https%3A%2F%2Fgateway.pinata.cloud%2Fipfs%2FQm123"
                    .to_string()
            ]
        );
        assert_eq!(state.preview, None);
    }

    #[tokio::test]
    async fn test_capture_failure_falls_back_to_plain_cast() {
        let collections = StubCollections::Entries(vec![entry("b", Some("https://img/b.png"))]);
        let mut engine = engine(
            collections,
            StubCapturer { fail: true },
            StubPinner { fail: false },
        );
        let mut state = submitted_state();
        engine.dispatch(&mut state, Event::Submit).await;

        let outcome = engine.dispatch(&mut state, Event::ShareRequested).await;
        assert_eq!(outcome.casts.len(), 1);
        assert!(outcome.alerts.is_empty());
        assert_eq!(outcome.casts[0].embeds, vec![APP_URL.to_string()]);
        assert!(outcome.casts[0].text.contains("Check it out!"));
        assert_eq!(state.preview, None);
        assert!(!state.capturing);
    }

    #[tokio::test]
    async fn test_pin_failure_alerts_then_falls_back() {
        let collections = StubCollections::Entries(vec![entry("b", Some("https://img/b.png"))]);
        let mut engine = engine(
            collections,
            StubCapturer { fail: false },
            StubPinner { fail: true },
        );
        let mut state = submitted_state();
        engine.dispatch(&mut state, Event::Submit).await;
        engine.dispatch(&mut state, Event::ShareRequested).await;

        let outcome = engine.dispatch(&mut state, Event::ShareConfirmed).await;
        assert_eq!(outcome.alerts.len(), 1);
        assert!(outcome.alerts[0].starts_with("Failed to share NFT:"));
        assert_eq!(outcome.casts.len(), 1);
        assert_eq!(outcome.casts[0].embeds, vec![APP_URL.to_string()]);
        assert_eq!(state.preview, None);
    }
}
