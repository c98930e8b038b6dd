use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A wallet address in the canonical `0x` + 40 hex digit form. Construction
/// goes through `FromStr`, so a held value is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,
    #[error("address is not a valid hex address")]
    Malformed,
}

pub fn is_valid_address(addr: &str) -> bool {
    let re = Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap();
    re.is_match(addr)
}

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated chip form, first six and last four characters.
    pub fn short(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl FromStr for WalletAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressParseError::Empty);
        }
        if !is_valid_address(s) {
            return Err(AddressParseError::Malformed);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
