use serde::Deserialize;
use utoipa::ToSchema;

/// Query carried by shared feed links. The score is accepted for
/// compatibility but does not influence the produced metadata.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ShareParams {
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
}
