use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::helpers::dto::AddressHistoryEntry;
use crate::helpers::wallet::WalletAddress;

pub const MAX_HISTORY: usize = 5;

/// Recently queried addresses, most recent first, deduplicated by address and
/// capped at `MAX_HISTORY` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressHistory {
    entries: Vec<AddressHistoryEntry>,
}

impl AddressHistory {
    /// Records a successful lookup. Re-querying a known address moves it to
    /// the front instead of duplicating it.
    pub fn record(&mut self, address: &WalletAddress) {
        self.entries.retain(|entry| entry.address != address.as_str());
        self.entries.insert(
            0,
            AddressHistoryEntry {
                address: address.to_string(),
                timestamp: Utc::now().timestamp_millis(),
            },
        );
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn entries(&self) -> &[AddressHistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
