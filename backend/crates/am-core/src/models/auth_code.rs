//! Auth code - the short numeric edit gate.
//!
//! A code is always exactly five ASCII digits, zero-padded (`"00042"`).
//! It is a convenience gate for a single user, not a credential.

use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of digits in every code.
pub const AUTH_CODE_LENGTH: usize = 5;

/// Largest numeric value a code can carry.
pub const AUTH_CODE_MAX: u32 = 99_999;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthCode(String);

impl AuthCode {
    /// Draw a fresh code uniformly from `0..=99999`.
    pub fn generate() -> Self {
        Self::from_number(rand::rng().random_range(0..=AUTH_CODE_MAX))
    }

    /// Zero-pad `value` to five digits. Values above 99999 are reduced modulo 100000.
    pub fn from_number(value: u32) -> Self {
        Self(format!("{:05}", value % (AUTH_CODE_MAX + 1)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AuthCode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        if s.len() == AUTH_CODE_LENGTH && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidAuthCode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl fmt::Display for AuthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AuthCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AuthCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AuthCode::from_str(&s).map_err(serde::de::Error::custom)
    }
}
