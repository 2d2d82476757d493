use std::fmt;

/// Session ordering violation.
///
/// Raised when a batch operation is called outside the required
/// `begin()`/`end()` pairing: double begin, end without begin, or a shape
/// submission while no session is active. Never recovered internally; the
/// caller must fix its call ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidState {
    /// The operation that was attempted.
    pub operation: &'static str,
    /// Whether an active session was required (true) or forbidden (false).
    pub requires_active: bool,
}

impl InvalidState {
    pub(crate) fn requires_session(operation: &'static str) -> Self {
        Self {
            operation,
            requires_active: true,
        }
    }

    pub(crate) fn requires_no_session(operation: &'static str) -> Self {
        Self {
            operation,
            requires_active: false,
        }
    }
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requires_active {
            write!(f, "{} called without an active batch session", self.operation)
        } else {
            write!(f, "{} called while a batch session is active", self.operation)
        }
    }
}

impl std::error::Error for InvalidState {}
