use thiserror::Error;

/// Failures raised by the in-memory tree passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("document nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },
}

pub type NormalizeResult<T> = std::result::Result<T, NormalizeError>;
