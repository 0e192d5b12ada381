//! Boundary adapter between the annotation surface and the annotation log.

use ultratrace_protocol::{AnnotationId, Geometry};

use crate::error::SessionError;
use crate::id_source::IdSource;
use crate::model::{ActiveTraceSelector, Annotation, AnnotationLog, TraceRegistry};

/// What happened to one committed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    Committed(AnnotationId),
    /// No trace was active; the geometry was discarded.
    Dropped,
}

/// Turn one surface gesture into a log entry, if a trace is active.
///
/// With no active trace the geometry is dropped silently. Otherwise the
/// active trace's id and *current* color are copied into a new annotation
/// that is appended to `log`. Each call appends at most once, so log order is
/// call order.
pub fn on_geometry_committed(
    selector: &ActiveTraceSelector,
    registry: &TraceRegistry,
    log: &mut AnnotationLog,
    ids: &mut dyn IdSource,
    geometry: Geometry,
) -> Result<IntakeOutcome, SessionError> {
    let Some(trace_id) = selector.current() else {
        return Ok(IntakeOutcome::Dropped);
    };
    let Some(trace) = registry.get(&trace_id) else {
        tracing::warn!(%trace_id, "active trace missing from registry");
        return Err(SessionError::DanglingSelection(trace_id));
    };

    let id = AnnotationId::from_uuid(ids.next_uuid());
    log.append(Annotation {
        id,
        geometry,
        trace_id,
        color: trace.color,
    });
    tracing::trace!(annotation_id = %id, %trace_id, x = geometry.x(), y = geometry.y(), "annotation committed");
    Ok(IntakeOutcome::Committed(id))
}
