use ultratrace_protocol::{Geometry, SessionEvent, TraceColor, TraceId};

use super::annotation::{Annotation, AnnotationLog};
use super::name_edit::NameEdits;
use super::registry::TraceRegistry;
use super::selection::ActiveTraceSelector;
use super::trace::Trace;
use crate::config::{ColorPolicy, OrphanPolicy, SessionConfig};
use crate::error::SessionError;
use crate::id_source::{IdSource, RandomIds};
use crate::intake::{self, IntakeOutcome};

/// Result of dispatching one [`SessionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    TraceAdded(TraceId),
    TraceUpdated(TraceId),
    SelectionChanged(Option<TraceId>),
    /// `purged` counts annotations dropped by [`OrphanPolicy::Cascade`].
    TraceRemoved { id: TraceId, purged: usize },
    Intake(IntakeOutcome),
}

/// One annotation session: the traces, the active selection, in-flight name
/// edits and the annotation log for a single image.
///
/// All mutation goes through `&mut self`, one event at a time, so the order
/// in which the host calls these methods is the order state changes in.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    registry: TraceRegistry,
    selector: ActiveTraceSelector,
    name_edits: NameEdits,
    log: AnnotationLog,
    ids: Box<dyn IdSource>,
}

impl Session {
    /// Create an empty session with random ids.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_id_source(config, RandomIds)
    }

    pub fn with_id_source(config: SessionConfig, ids: impl IdSource + 'static) -> Self {
        Self {
            config,
            registry: TraceRegistry::new(),
            selector: ActiveTraceSelector::new(),
            name_edits: NameEdits::new(),
            log: AnnotationLog::new(),
            ids: Box::new(ids),
        }
    }

    // --- Traces ---

    /// Add a trace with a fresh id, an empty name and the default color.
    pub fn add_trace(&mut self) -> TraceId {
        let id = TraceId::from_uuid(self.ids.next_uuid());
        self.registry.upsert(Trace::new(id, self.config.default_color));
        tracing::debug!(trace_id = %id, "trace added");
        id
    }

    /// Insert or replace a whole trace.
    pub fn upsert_trace(&mut self, trace: Trace) {
        self.registry.upsert(trace);
    }

    /// Commit a new name for an existing trace. Any draft still buffered for
    /// that row is superseded.
    pub fn edit_trace_name(
        &mut self,
        id: TraceId,
        name: impl Into<String>,
    ) -> Result<(), SessionError> {
        let name = name.into();
        self.modify_trace(id, |trace| trace.name = name)?;
        self.name_edits.discard(&id);
        Ok(())
    }

    /// Change a trace's color, returning the previous one. Annotations
    /// already committed keep the color they captured.
    pub fn recolor_trace(
        &mut self,
        id: TraceId,
        color: TraceColor,
    ) -> Result<TraceColor, SessionError> {
        let mut previous = color;
        self.modify_trace(id, |trace| {
            previous = std::mem::replace(&mut trace.color, color);
        })?;
        Ok(previous)
    }

    pub fn set_trace_visible(&mut self, id: TraceId, visible: bool) -> Result<(), SessionError> {
        self.modify_trace(id, |trace| trace.visible = visible)
    }

    /// Remove a trace.
    ///
    /// Clears the selection and any pending name edit that refer to it, then
    /// applies the configured [`OrphanPolicy`] to its annotations. Returns
    /// how many annotations were purged.
    pub fn remove_trace(&mut self, id: TraceId) -> Result<usize, SessionError> {
        if self.registry.remove(&id).is_none() {
            tracing::warn!(trace_id = %id, "remove of unknown trace");
            return Err(SessionError::UnknownTrace(id));
        }
        self.selector.clear_if(&id);
        self.name_edits.discard(&id);
        let purged = match self.config.orphan_policy {
            OrphanPolicy::Keep => 0,
            OrphanPolicy::Cascade => self.log.purge_trace(id),
        };
        tracing::debug!(trace_id = %id, purged, "trace removed");
        Ok(purged)
    }

    fn modify_trace(
        &mut self,
        id: TraceId,
        f: impl FnOnce(&mut Trace),
    ) -> Result<(), SessionError> {
        let Some(mut trace) = self.registry.get(&id).cloned() else {
            tracing::warn!(trace_id = %id, "edit of unknown trace");
            return Err(SessionError::UnknownTrace(id));
        };
        f(&mut trace);
        self.registry.upsert(trace);
        Ok(())
    }

    pub fn traces(&self) -> Vec<Trace> {
        self.registry.list()
    }

    pub fn trace(&self, id: &TraceId) -> Option<&Trace> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &TraceRegistry {
        &self.registry
    }

    // --- Selection ---

    pub fn select_trace(&mut self, id: Option<TraceId>) -> Result<(), SessionError> {
        self.selector.select(&self.registry, id)
    }

    pub fn selected_id(&self) -> Option<TraceId> {
        self.selector.current()
    }

    // --- Name editing ---

    /// A keystroke in a trace row's name input.
    pub fn type_trace_name(
        &mut self,
        id: TraceId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        if !self.registry.contains(&id) {
            return Err(SessionError::UnknownTrace(id));
        }
        self.name_edits.input(id, text);
        Ok(())
    }

    /// The row's name input lost focus: commit its draft, if any.
    pub fn blur_trace_name(&mut self, id: TraceId) -> Option<Trace> {
        self.name_edits.blur(id, &mut self.registry)
    }

    pub fn discard_trace_name(&mut self, id: &TraceId) -> bool {
        self.name_edits.discard(id)
    }

    pub fn name_edits(&self) -> &NameEdits {
        &self.name_edits
    }

    // --- Annotations ---

    pub fn on_geometry_committed(
        &mut self,
        geometry: Geometry,
    ) -> Result<IntakeOutcome, SessionError> {
        intake::on_geometry_committed(
            &self.selector,
            &self.registry,
            &mut self.log,
            self.ids.as_mut(),
            geometry,
        )
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.log.list()
    }

    pub fn log(&self) -> &AnnotationLog {
        &self.log
    }

    /// Color to draw `annotation` with under the configured [`ColorPolicy`].
    pub fn marker_color(&self, annotation: &Annotation) -> TraceColor {
        match self.config.color_policy {
            ColorPolicy::Captured => annotation.color,
            ColorPolicy::Live => self
                .registry
                .get(&annotation.trace_id)
                .map_or(annotation.color, |trace| trace.color),
        }
    }

    /// Whether `annotation` should be drawn. Annotations of removed traces
    /// stay visible.
    pub fn is_annotation_visible(&self, annotation: &Annotation) -> bool {
        self.registry
            .get(&annotation.trace_id)
            .is_none_or(|trace| trace.visible)
    }

    /// Closest drawn annotation to `(x, y)` within `max_distance`
    /// (percentage units). Annotations of hidden traces are not drawn, so
    /// they cannot be hit.
    pub fn nearest_visible(&self, x: f64, y: f64, max_distance: f64) -> Option<&Annotation> {
        self.log
            .nearest_where(x, y, max_distance, |annotation| {
                self.is_annotation_visible(annotation)
            })
    }

    // --- Host events ---

    /// Handle one event from a front end.
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<EventOutcome, SessionError> {
        match event {
            SessionEvent::AddTrace => Ok(EventOutcome::TraceAdded(self.add_trace())),
            SessionEvent::EditTrace { id, name } => {
                self.edit_trace_name(id, name)?;
                Ok(EventOutcome::TraceUpdated(id))
            }
            SessionEvent::SelectTrace { id } => {
                self.select_trace(id)?;
                Ok(EventOutcome::SelectionChanged(id))
            }
            SessionEvent::RecolorTrace { id, color } => {
                self.recolor_trace(id, color)?;
                Ok(EventOutcome::TraceUpdated(id))
            }
            SessionEvent::SetTraceVisible { id, visible } => {
                self.set_trace_visible(id, visible)?;
                Ok(EventOutcome::TraceUpdated(id))
            }
            SessionEvent::RemoveTrace { id } => {
                let purged = self.remove_trace(id)?;
                Ok(EventOutcome::TraceRemoved { id, purged })
            }
            SessionEvent::GeometryCommitted { geometry } => {
                self.on_geometry_committed(geometry).map(EventOutcome::Intake)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
