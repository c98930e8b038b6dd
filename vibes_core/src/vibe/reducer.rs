use crate::helpers::wallet::{AddressParseError, WalletAddress};
use crate::vibe::command::Command;
use crate::vibe::event::Event;
use crate::vibe::state::{VibeError, ViewState};

/// Applies one event to the view state and returns the side effects to run.
/// Pure: no I/O and no randomness, so every transition is testable directly.
pub fn reduce(state: &mut ViewState, event: Event) -> Vec<Command> {
    match event {
        Event::AddressChanged { address } | Event::HistoryPicked { address } => {
            state.address = address;
            vec![]
        }
        Event::Submit => {
            // The trigger is disabled while a fetch is pending.
            if state.loading {
                return vec![];
            }
            match state.address.parse::<WalletAddress>() {
                Err(AddressParseError::Empty) => {
                    state.error = Some(VibeError::EmptyAddress);
                    vec![]
                }
                Err(AddressParseError::Malformed) => {
                    state.error = Some(VibeError::MalformedAddress);
                    vec![]
                }
                Ok(address) => {
                    state.loading = true;
                    state.error = None;
                    state.current = None;
                    vec![Command::FetchCollections { address }]
                }
            }
        }
        Event::FetchSucceeded { address, nft } => {
            state.loading = false;
            state.current = Some(nft);
            state.history.record(&address);
            vec![]
        }
        Event::FetchFailed { error } => {
            state.loading = false;
            state.error = Some(error);
            vec![]
        }
        Event::CheckAnother => {
            if let Some(nft) = state.current.take() {
                state.previous = Some(nft);
            }
            state.address.clear();
            state.error = None;
            vec![]
        }
        Event::Back => {
            // Single-level undo: consumes the previous slot.
            if let Some(nft) = state.previous.take() {
                state.current = Some(nft);
            }
            vec![]
        }
        Event::ShareRequested => {
            if state.capturing {
                return vec![];
            }
            let Some(nft) = state.current.clone() else {
                return vec![];
            };
            state.capturing = true;
            vec![Command::CaptureCard { nft }]
        }
        Event::CaptureSucceeded { image } => {
            state.capturing = false;
            state.preview = Some(image);
            vec![]
        }
        Event::CaptureFailed => {
            state.capturing = false;
            match state.current.clone() {
                Some(nft) => vec![Command::ComposeFallbackCast { nft }],
                None => vec![],
            }
        }
        Event::ShareConfirmed => {
            let (Some(image), Some(nft)) = (state.preview.clone(), state.current.clone()) else {
                return vec![];
            };
            vec![Command::PublishPreview { nft, image }]
        }
        Event::ShareCancelled => {
            state.preview = None;
            vec![]
        }
        Event::PublishSucceeded { share_url } => {
            state.preview = None;
            match state.current.clone() {
                Some(nft) => vec![Command::ComposeShareCast { nft, share_url }],
                None => vec![],
            }
        }
        Event::PublishFailed { message } => {
            state.preview = None;
            let mut commands = vec![Command::Alert {
                message: format!("Failed to share NFT: {message}"),
            }];
            if let Some(nft) = state.current.clone() {
                commands.push(Command::ComposeFallbackCast { nft });
            }
            commands
        }
    }
}
