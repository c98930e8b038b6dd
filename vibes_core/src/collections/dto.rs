use serde::Deserialize;

use crate::helpers::dto::{Nft, NftAttribute, VolumeChange};

/// Response body of the marketplace `users/{address}/collections/v3` call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCollectionsResponse {
    #[serde(default)]
    pub collections: Vec<CollectionEntry>,
}

/// One row of the user collections listing. The nested collection record may
/// be missing entirely, or present without an image.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionEntry {
    pub collection: Option<CollectionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<NftAttribute>,
    #[serde(default)]
    pub volume_change: VolumeChange,
}

impl CollectionEntry {
    /// The displayable NFT behind this entry, if the record carries a
    /// non-empty image.
    pub fn usable_nft(&self) -> Option<Nft> {
        let record = self.collection.as_ref()?;
        let image = record.image.as_deref().filter(|image| !image.is_empty())?;
        Some(Nft {
            id: record.id.clone(),
            name: record.name.clone().unwrap_or_default(),
            image: image.to_string(),
            description: record.description.clone().unwrap_or_default(),
            attributes: record.attributes.clone(),
            volume_change: record.volume_change,
        })
    }
}
