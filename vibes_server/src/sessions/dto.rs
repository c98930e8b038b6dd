use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use vibes_core::helpers::dto::CastDraft;
use vibes_core::helpers::wallet::WalletAddress;
use vibes_core::vibe::engine::DispatchOutcome;
use vibes_core::vibe::event::Event;
use vibes_core::vibe::presentation::NftCard;
use vibes_core::vibe::state::{Screen, ViewState};

/// The user-triggered events a client may post. Settlement events are engine
/// internal and deliberately unrepresentable here.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    AddressChanged { address: String },
    Submit,
    CheckAnother,
    Back,
    HistoryPicked { address: String },
    ShareRequested,
    ShareConfirmed,
    ShareCancelled,
}

impl From<EventRequest> for Event {
    fn from(request: EventRequest) -> Self {
        match request {
            EventRequest::AddressChanged { address } => Event::AddressChanged { address },
            EventRequest::Submit => Event::Submit,
            EventRequest::CheckAnother => Event::CheckAnother,
            EventRequest::Back => Event::Back,
            EventRequest::HistoryPicked { address } => Event::HistoryPicked { address },
            EventRequest::ShareRequested => Event::ShareRequested,
            EventRequest::ShareConfirmed => Event::ShareConfirmed,
            EventRequest::ShareCancelled => Event::ShareCancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryChip {
    pub address: String,
    pub short: String,
    pub timestamp: i64,
}

/// Full projection of a session after an event: everything a client needs to
/// render, plus the casts and alerts the event produced.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionView {
    pub screen: Screen,
    pub address: String,
    pub loading: bool,
    pub capturing: bool,
    pub can_go_back: bool,
    pub error: Option<String>,
    pub history: Vec<HistoryChip>,
    pub card: Option<NftCard>,
    pub preview: Option<String>,
    pub casts: Vec<CastDraft>,
    pub alerts: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionCreated {
    #[schema(value_type = String)]
    pub session_id: Uuid,
    pub view: SessionView,
}

impl SessionView {
    pub fn project(state: &ViewState, outcome: DispatchOutcome) -> Self {
        Self {
            screen: state.screen(),
            address: state.address.clone(),
            loading: state.loading,
            capturing: state.capturing,
            can_go_back: state.previous.is_some(),
            error: state.error.map(|error| error.to_string()),
            history: state
                .history
                .entries()
                .iter()
                .map(|entry| HistoryChip {
                    address: entry.address.clone(),
                    short: entry
                        .address
                        .parse::<WalletAddress>()
                        .map(|address| address.short())
                        .unwrap_or_else(|_| entry.address.clone()),
                    timestamp: entry.timestamp,
                })
                .collect(),
            card: state.current.as_ref().map(NftCard::from_nft),
            preview: state.preview.as_ref().map(|image| image.data_url.clone()),
            casts: outcome.casts,
            alerts: outcome.alerts,
        }
    }
}
