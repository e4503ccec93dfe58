//! Client settings blob
//!
//! Persisted as an opaque JSON blob; camelCase keys keep the blob
//! compatible with the original localStorage format. No versioning or
//! migration logic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
    pub sound_enabled: bool,
    pub voice_feedback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sound_enabled: true,
            voice_feedback: true,
        }
    }
}
