//! Reply and bio generation

use rizzmaster_core::GenerationOutcome;
use rizzmaster_domain::{GenerationRequest, Result as DomainResult};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Three reply suggestions for a chat, from pasted text and/or a screenshot
/// (data URL or bare base64).
pub async fn generate_replies(
    ctx: &AppContext,
    text: String,
    image: Option<String>,
) -> DomainResult<GenerationOutcome> {
    let request = GenerationRequest::Chat { text, image };
    execute_command(ctx, "generation::generate_replies", || ctx.generation.generate(request)).await
}

pub async fn generate_bio(ctx: &AppContext, about: String) -> DomainResult<GenerationOutcome> {
    let request = GenerationRequest::Bio { about };
    execute_command(ctx, "generation::generate_bio", || ctx.generation.generate(request)).await
}
