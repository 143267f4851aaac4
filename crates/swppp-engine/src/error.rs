use thiserror::Error;

/// Errors the engine reports to its caller.
///
/// There are no retryable or transient failures here: the engine performs no
/// I/O, so every failure is immediate and deterministic. The surrounding
/// application translates these into user-facing messages.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
