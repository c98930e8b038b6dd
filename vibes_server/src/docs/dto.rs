use crate::{info, manifest, sessions, webhook};
use utoipa::OpenApi;
use vibes_core::helpers::dto::{CastDraft, Nft, NftAttribute, VolumeChange};
use vibes_core::vibe::presentation::{MetricCell, NftCard};
use vibes_core::vibe::state::Screen;

#[derive(OpenApi)]
#[openapi(
    paths(
        info::handler::info,
        manifest::handler::manifest,
        webhook::handler::webhook,
        sessions::handler::create_session,
        sessions::handler::session_event,
    ),
    components(schemas(
        info::dto::Info,
        manifest::dto::MiniAppManifest,
        sessions::dto::EventRequest,
        sessions::dto::SessionCreated,
        sessions::dto::SessionView,
        sessions::dto::HistoryChip,
        Nft,
        NftAttribute,
        VolumeChange,
        NftCard,
        MetricCell,
        CastDraft,
        Screen,
    ))
)]
pub struct ApiDoc;
