use std::sync::Arc;

use dashmap::DashMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use uuid::Uuid;

use vibes_core::collections::client::CollectionsClient;
use vibes_core::media::pinata::PinataClient;
use vibes_core::vibe::engine::{Engine, EngineConfig};
use vibes_core::vibe::state::ViewState;

use crate::capture::RenderApiCapturer;

/// One user's view state. The mutex serializes events per session, so a
/// second fetch or capture can never start while one is pending.
pub type SharedSession = Arc<Mutex<ViewState>>;

pub struct ServerState {
    app_url: String,
    collections: CollectionsClient,
    pinner: PinataClient,
    capturer: RenderApiCapturer,
    sessions: DashMap<Uuid, SharedSession>,
}

impl From<(String, CollectionsClient, PinataClient, RenderApiCapturer)> for ServerState {
    fn from(states: (String, CollectionsClient, PinataClient, RenderApiCapturer)) -> Self {
        let (app_url, collections, pinner, capturer) = states;
        Self {
            app_url,
            collections,
            pinner,
            capturer,
            sessions: DashMap::new(),
        }
    }
}

impl ServerState {
    pub fn app_url(&self) -> String {
        self.app_url.clone()
    }

    pub fn create_session(&self) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session: SharedSession = Arc::new(Mutex::new(ViewState::default()));
        self.sessions.insert(id, session.clone());
        (id, session)
    }

    pub fn session(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.get(id).map(|session| session.clone())
    }

    /// A fresh engine over the shared clients; the RNG is per call so every
    /// dispatch draws independently.
    pub fn engine(&self) -> Engine<CollectionsClient, RenderApiCapturer, PinataClient, StdRng> {
        Engine::new(
            self.collections.clone(),
            self.capturer.clone(),
            self.pinner.clone(),
            StdRng::from_entropy(),
            EngineConfig {
                app_url: self.app_url.clone(),
            },
        )
    }
}
