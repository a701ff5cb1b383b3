//! Error type for the mocked integrations.

/// Errors surfaced by the integration mocks.
///
/// The mocks perform no real I/O, so the only failure mode is input
/// validation; real implementations are expected to extend this with
/// their transport errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
