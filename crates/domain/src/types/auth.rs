//! Identity providers for redirect-based sign-in

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
}

crate::impl_wire_name_conversions!(OAuthProvider {
    Google => "google",
});
