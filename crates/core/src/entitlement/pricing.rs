//! Cost schedule

use rizzmaster_domain::constants::{COST_BIO, COST_CHAT_TEXT, COST_CHAT_WITH_IMAGE};
use rizzmaster_domain::{GenerationRequest, RequestKind};

/// Credits charged for a request of `kind`; an image only affects chat.
pub const fn cost_of(kind: RequestKind, has_image: bool) -> u32 {
    match (kind, has_image) {
        (RequestKind::Chat, false) => COST_CHAT_TEXT,
        (RequestKind::Chat, true) => COST_CHAT_WITH_IMAGE,
        (RequestKind::Bio, _) => COST_BIO,
    }
}

pub fn cost_for_request(request: &GenerationRequest) -> u32 {
    cost_of(request.kind(), request.has_image())
}
