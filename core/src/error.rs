/// Records a contract violation through `tracing` when the `tracing` feature is enabled, and compiles to nothing
/// otherwise.
macro_rules! trace_violation {
  (error, $($arg:tt)+) => {{
    #[cfg(feature = "tracing")]
    tracing::error!($($arg)+);
  }};
  (debug, $($arg:tt)+) => {{
    #[cfg(feature = "tracing")]
    tracing::debug!($($arg)+);
  }};
}

/// Contract violations raised by the container combinators.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
  /// An extraction was attempted on the variant that cannot supply the requested payload.
  #[error("{0}")]
  Unwrap(String),
  /// A dynamically checked combinator received a value of the wrong shape.
  #[error("expected {expected}; got {actual}")]
  TypeMismatch {
    expected: &'static str,
    actual: &'static str,
  },
  /// A tuple-like value did not have exactly two items.
  #[error("expected value to have exactly 2 items; got {0}")]
  ArityMismatch(usize),
}

impl Error {
  #[inline]
  pub fn new_unwrap(message: impl Into<String>) -> Self {
    Self::Unwrap(message.into())
  }

  #[inline]
  pub fn is_unwrap(&self) -> bool {
    matches!(self, Self::Unwrap(_))
  }

  /// Returns `true` for [`TypeMismatch`](Self::TypeMismatch) and for its subcase
  /// [`ArityMismatch`](Self::ArityMismatch).
  #[inline]
  pub fn is_type_mismatch(&self) -> bool {
    matches!(self, Self::TypeMismatch { .. } | Self::ArityMismatch(_))
  }

  #[inline]
  pub fn is_arity_mismatch(&self) -> bool {
    matches!(self, Self::ArityMismatch(_))
  }
}

pub(crate) const UNWRAP_NONE: &str = "error unwrapping None";
pub(crate) const UNWRAP_ERR: &str = "error unwrapping Err";

/// Panics with `error`, attributing the panic to the caller of the extraction.
#[cold]
#[track_caller]
pub(crate) fn unwrap_failed(error: Error) -> ! {
  trace_violation!(error, %error, "unwrap failed");
  panic!("{}", error)
}
