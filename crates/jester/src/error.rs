use thiserror::Error;

/// Errors produced by `jester`.
///
/// Navigation never fails. The only error the value layer raises itself is
/// [`Error::TypeMismatch`], returned by the strict accessors on
/// [`Data`](crate::Data). Codec failures are passed through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("type assertion failed (type mismatch)")]
    TypeMismatch,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether a strict accessor rejected the value's kind.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
