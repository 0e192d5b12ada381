use thiserror::Error;
use ultratrace_protocol::TraceId;

/// Contract violations raised by session operations.
///
/// None of these can happen when a front end only hands the core ids it
/// read from the core. They point at a wiring bug, so callers should surface
/// them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no trace with id {0}")]
    UnknownTrace(TraceId),
    #[error("active trace {0} is no longer registered")]
    DanglingSelection(TraceId),
}
