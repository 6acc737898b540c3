//! Profile entity - the single record the service stores.

use crate::{AuthCode, ProfileFields};

use serde::{Deserialize, Serialize};

/// The one and only profile record.
///
/// Field names double as the wire and storage names, so the JSON produced by
/// `/patient_info` is the same document that lands in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub goals_001: String,
    #[serde(default)]
    pub goals_002: String,
    #[serde(default)]
    pub goals_003: String,
    #[serde(default)]
    pub aboutme_001: String,
    #[serde(default)]
    pub aboutme_002: String,
    #[serde(default)]
    pub aboutme_003: String,
    #[serde(default)]
    pub auth_code: Option<AuthCode>,
}

impl Profile {
    /// Build a full record from submitted fields plus the code to keep.
    pub fn from_fields(fields: ProfileFields, auth_code: Option<AuthCode>) -> Self {
        Self {
            name: fields.name,
            goals_001: fields.goals_001,
            goals_002: fields.goals_002,
            goals_003: fields.goals_003,
            aboutme_001: fields.aboutme_001,
            aboutme_002: fields.aboutme_002,
            aboutme_003: fields.aboutme_003,
            auth_code,
        }
    }

    pub fn fields(&self) -> ProfileFields {
        ProfileFields {
            name: self.name.clone(),
            aboutme_001: self.aboutme_001.clone(),
            aboutme_002: self.aboutme_002.clone(),
            aboutme_003: self.aboutme_003.clone(),
            goals_001: self.goals_001.clone(),
            goals_002: self.goals_002.clone(),
            goals_003: self.goals_003.clone(),
        }
    }
}
