use ultratrace_protocol::TraceId;

use super::registry::TraceRegistry;
use crate::error::SessionError;

/// Which trace newly committed annotations are attributed to.
///
/// Holds at most one id, and only ever an id that resolved in the registry
/// when it was selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveTraceSelector {
    current: Option<TraceId>,
}

impl ActiveTraceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the active trace.
    ///
    /// Selecting an id the registry does not know is a caller bug. It is
    /// reported as [`SessionError::UnknownTrace`] and the previous selection
    /// stays in place.
    pub fn select(
        &mut self,
        registry: &TraceRegistry,
        id: Option<TraceId>,
    ) -> Result<(), SessionError> {
        if let Some(id) = id
            && !registry.contains(&id)
        {
            tracing::warn!(trace_id = %id, "select of unknown trace");
            return Err(SessionError::UnknownTrace(id));
        }
        self.current = id;
        Ok(())
    }

    pub fn current(&self) -> Option<TraceId> {
        self.current
    }

    pub fn is_selected(&self, id: &TraceId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Drop the selection if it points at `id`. Returns whether it did.
    pub fn clear_if(&mut self, id: &TraceId) -> bool {
        if self.is_selected(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trace;
    use ultratrace_protocol::TraceColor;
    use uuid::Uuid;

    fn tid(n: u128) -> TraceId {
        TraceId::from_uuid(Uuid::from_u128(n))
    }

    fn registry_with(ids: &[u128]) -> TraceRegistry {
        let mut reg = TraceRegistry::new();
        for n in ids {
            reg.upsert(Trace::new(tid(*n), TraceColor::Blue));
        }
        reg
    }

    #[test]
    fn starts_empty() {
        assert_eq!(ActiveTraceSelector::new().current(), None);
    }

    #[test]
    fn select_existing_and_clear() {
        let reg = registry_with(&[1, 2]);
        let mut sel = ActiveTraceSelector::new();

        assert!(sel.select(&reg, Some(tid(2))).is_ok());
        assert_eq!(sel.current(), Some(tid(2)));
        assert!(sel.is_selected(&tid(2)));

        assert!(sel.select(&reg, None).is_ok());
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn unknown_id_fails_and_keeps_previous() {
        let reg = registry_with(&[1]);
        let mut sel = ActiveTraceSelector::new();
        assert!(sel.select(&reg, Some(tid(1))).is_ok());

        let err = sel.select(&reg, Some(tid(42)));
        assert_eq!(err, Err(SessionError::UnknownTrace(tid(42))));
        assert_eq!(sel.current(), Some(tid(1)));
    }

    #[test]
    fn clear_if_only_matches_current() {
        let reg = registry_with(&[1, 2]);
        let mut sel = ActiveTraceSelector::new();
        assert!(sel.select(&reg, Some(tid(1))).is_ok());

        assert!(!sel.clear_if(&tid(2)));
        assert_eq!(sel.current(), Some(tid(1)));
        assert!(sel.clear_if(&tid(1)));
        assert_eq!(sel.current(), None);
    }
}
