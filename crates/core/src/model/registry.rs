use indexmap::IndexMap;
use ultratrace_protocol::TraceId;

use super::trace::Trace;

/// The authoritative set of traces.
///
/// Keyed by id, ordered by first insertion. The order is the row order the
/// trace list displays, so updating an existing trace never moves it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceRegistry {
    traces: IndexMap<TraceId, Trace>,
}

impl TraceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `trace` at the end, or replace the fields of the trace with the
    /// same id in place.
    pub fn upsert(&mut self, trace: Trace) {
        // `IndexMap::insert` keeps the slot of an existing key.
        self.traces.insert(trace.id, trace);
    }

    pub fn get(&self, id: &TraceId) -> Option<&Trace> {
        self.traces.get(id)
    }

    pub fn contains(&self, id: &TraceId) -> bool {
        self.traces.contains_key(id)
    }

    /// Owned snapshot of all traces in insertion order.
    pub fn list(&self) -> Vec<Trace> {
        self.traces.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trace> {
        self.traces.values()
    }

    /// Row index of `id` in display order.
    pub fn position(&self, id: &TraceId) -> Option<usize> {
        self.traces.get_index_of(id)
    }

    /// Remove a trace. The remaining traces keep their relative order.
    pub fn remove(&mut self, id: &TraceId) -> Option<Trace> {
        self.traces.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
