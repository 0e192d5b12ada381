use serde::{Deserialize, Serialize};
use ultratrace_protocol::{AnnotationId, Geometry, TraceColor, TraceId};

/// A committed point marker.
///
/// `trace_id` and `color` are copied from the active trace at commit time.
/// Editing the trace later does not change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub geometry: Geometry,
    pub trace_id: TraceId,
    pub color: TraceColor,
}

/// Append-only record of committed annotations, in commit order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationLog {
    entries: Vec<Annotation>,
}

impl AnnotationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, annotation: Annotation) {
        self.entries.push(annotation);
    }

    /// Owned snapshot in commit order.
    pub fn list(&self) -> Vec<Annotation> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.iter()
    }

    pub fn get(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.entries.iter().find(|a| a.id == *id)
    }

    pub fn for_trace(&self, trace_id: TraceId) -> impl Iterator<Item = &Annotation> {
        self.entries.iter().filter(move |a| a.trace_id == trace_id)
    }

    /// Closest annotation to `(x, y)` within `max_distance` (percentage
    /// units). Later entries win ties, matching the draw order where they
    /// sit on top.
    pub fn nearest(&self, x: f64, y: f64, max_distance: f64) -> Option<&Annotation> {
        self.nearest_where(x, y, max_distance, |_| true)
    }

    /// [`AnnotationLog::nearest`] restricted to entries `keep` accepts.
    pub fn nearest_where(
        &self,
        x: f64,
        y: f64,
        max_distance: f64,
        mut keep: impl FnMut(&Annotation) -> bool,
    ) -> Option<&Annotation> {
        let limit = max_distance * max_distance;
        let mut best: Option<(&Annotation, f64)> = None;
        for annotation in self.entries.iter().filter(|a| keep(a)) {
            let d = annotation.geometry.sq_dist_from(x, y);
            if d > limit {
                continue;
            }
            if best.is_none_or(|(_, best_d)| d <= best_d) {
                best = Some((annotation, d));
            }
        }
        best.map(|(annotation, _)| annotation)
    }

    /// Remove every annotation tagged with `trace_id`, keeping the order of
    /// the rest. Only used when a removed trace cascades; returns how many
    /// entries were dropped.
    pub fn purge_trace(&mut self, trace_id: TraceId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|a| a.trace_id != trace_id);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
