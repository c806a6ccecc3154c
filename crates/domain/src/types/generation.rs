//! Generation requests and results

use serde::{Deserialize, Serialize};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationRequest {
    /// Reply suggestions for a pasted chat and/or screenshot.
    Chat {
        text: String,
        /// Screenshot as a data URL or bare base64 string.
        image: Option<String>,
    },
    /// A dating-profile bio from a description of the user.
    Bio { about: String },
}

/// Pricing dimension of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Chat,
    Bio,
}

impl GenerationRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Chat { .. } => RequestKind::Chat,
            Self::Bio { .. } => RequestKind::Bio,
        }
    }

    pub fn has_image(&self) -> bool {
        matches!(self, Self::Chat { image: Some(image), .. } if !image.trim().is_empty())
    }
}

/// Three reply styles plus a read on the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplySuggestions {
    pub tease: String,
    pub smooth: String,
    pub chaotic: String,
    #[serde(default)]
    pub analysis: String,
    /// 0..=100 romantic potential.
    pub love_score: u8,
    pub potential_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioDraft {
    pub bio: String,
    #[serde(default)]
    pub analysis: String,
}

/// Output of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationResult {
    Chat(ReplySuggestions),
    Bio(BioDraft),
}
