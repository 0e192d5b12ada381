use serde::{Deserialize, Serialize};

use crate::color::TraceColor;
use crate::ids::TraceId;
use crate::types::Geometry;

/// A discrete user-interaction event delivered by a front end to the core.
///
/// The host hands these over one at a time, in the order the user produced
/// them. Each one is handled synchronously before the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// "+" pressed in the trace list. The core chooses id and defaults.
    AddTrace,

    /// A trace name input lost focus with a committed value.
    EditTrace { id: TraceId, name: String },

    /// A trace row's radio button was picked, or the selection was cleared.
    SelectTrace { id: Option<TraceId> },

    RecolorTrace { id: TraceId, color: TraceColor },

    SetTraceVisible { id: TraceId, visible: bool },

    RemoveTrace { id: TraceId },

    /// The annotation surface finished a point gesture.
    GeometryCommitted { geometry: Geometry },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_event_from_json() {
        let json = r#"{"type":"geometry_committed","geometry":{"kind":"point","x":10,"y":20}}"#;
        let event: Result<SessionEvent, _> = serde_json::from_str(json);
        let expected = Geometry::point(10.0, 20.0).expect("in range");
        assert_eq!(
            event.ok(),
            Some(SessionEvent::GeometryCommitted { geometry: expected })
        );
    }

    #[test]
    fn invalid_geometry_rejects_the_event() {
        let json = r#"{"type":"geometry_committed","geometry":{"x":-3,"y":20}}"#;
        assert!(serde_json::from_str::<SessionEvent>(json).is_err());
    }

    #[test]
    fn add_trace_has_no_payload() {
        let json = serde_json::to_string(&SessionEvent::AddTrace).unwrap_or_default();
        assert_eq!(json, r#"{"type":"add_trace"}"#);
    }
}
