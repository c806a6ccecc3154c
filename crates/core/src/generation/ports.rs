//! Port interface for the generative model

use async_trait::async_trait;
use rizzmaster_domain::{GenerationRequest, GenerationResult, Result};

/// Turns a validated request into reply suggestions or a bio.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}
