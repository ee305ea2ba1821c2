use common::StationDataPayload;

use crate::client::FetchError;

/// Presentation state of one fetch cycle. Exactly one state holds at a
/// time; `Error` and `Ready` are terminal for the cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready(StationDataPayload),
}

impl Default for FetchState {
    fn default() -> Self {
        Self::Loading
    }
}

impl FetchState {
    /// Folds a fetch outcome into the terminal state for this cycle. The
    /// error message is carried verbatim for display.
    pub fn resolve(outcome: Result<StationDataPayload, FetchError>) -> Self {
        match outcome {
            Ok(payload) => Self::Ready(payload),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn payload(&self) -> Option<&StationDataPayload> {
        match self {
            Self::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
