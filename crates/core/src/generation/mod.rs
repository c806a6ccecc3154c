pub mod ports;
pub mod workflow;

pub use ports::GenerationService;
pub use workflow::{GenerationOutcome, GenerationWorkflow};
