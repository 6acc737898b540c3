use serde::{Deserialize, Serialize};

/// Every user-editable field of the profile.
///
/// This is the payload of an update: it deliberately has no auth code, so a
/// form submission can never overwrite a code that is being exchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    pub name: String,
    pub aboutme_001: String,
    pub aboutme_002: String,
    pub aboutme_003: String,
    pub goals_001: String,
    pub goals_002: String,
    pub goals_003: String,
}
