use std::collections::HashMap;

use ultratrace_protocol::TraceId;

use super::registry::TraceRegistry;
use super::trace::Trace;

/// Edit state of one trace row's name input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NameEditBuffer {
    /// Nothing typed since the last commit; the row shows the committed name.
    #[default]
    Idle,
    /// Holds the latest typed value. The registry has not seen it yet.
    Editing(String),
}

impl NameEditBuffer {
    pub fn input(&mut self, text: impl Into<String>) {
        *self = Self::Editing(text.into());
    }

    /// Editing -> Idle, handing back the value to commit.
    pub fn take_commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Editing(value) => Some(value),
            Self::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Editing(value) => Some(value.as_str()),
            Self::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// Name buffers for all rows. Rows are independent: typing into or
/// committing one row never touches another.
#[derive(Debug, Clone, Default)]
pub struct NameEdits {
    rows: HashMap<TraceId, NameEditBuffer>,
}

impl NameEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// A keystroke in the row's input. `text` is the whole current value.
    pub fn input(&mut self, id: TraceId, text: impl Into<String>) {
        self.rows.entry(id).or_default().input(text);
    }

    /// The row's input lost focus.
    ///
    /// Commits the buffered name into the registry's current copy of the
    /// trace, so fields changed meanwhile (color, visibility) are kept.
    /// Returns the committed trace, or `None` if the row was idle or the
    /// trace has been removed since editing started.
    pub fn blur(&mut self, id: TraceId, registry: &mut TraceRegistry) -> Option<Trace> {
        let name = self.rows.remove(&id)?.take_commit()?;
        let mut trace = registry.get(&id)?.clone();
        trace.name = name;
        registry.upsert(trace.clone());
        Some(trace)
    }

    /// Drop an uncommitted edit. Returns whether anything was buffered.
    pub fn discard(&mut self, id: &TraceId) -> bool {
        self.rows
            .remove(id)
            .is_some_and(|buffer| buffer.is_editing())
    }

    pub fn draft(&self, id: &TraceId) -> Option<&str> {
        self.rows.get(id).and_then(NameEditBuffer::draft)
    }

    pub fn is_editing(&self, id: &TraceId) -> bool {
        self.rows.get(id).is_some_and(NameEditBuffer::is_editing)
    }

    /// What the row's input should show: the draft while editing, else the
    /// committed name.
    pub fn display_value<'a>(&'a self, trace: &'a Trace) -> &'a str {
        self.draft(&trace.id).unwrap_or(&trace.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultratrace_protocol::TraceColor;
    use uuid::Uuid;

    fn tid(n: u128) -> TraceId {
        TraceId::from_uuid(Uuid::from_u128(n))
    }

    fn registry() -> TraceRegistry {
        let mut reg = TraceRegistry::new();
        reg.upsert(Trace::new(tid(1), TraceColor::Blue).with_name("tongue"));
        reg.upsert(Trace::new(tid(2), TraceColor::Red).with_name("palate"));
        reg
    }

    fn name_of(reg: &TraceRegistry, n: u128) -> Option<&str> {
        reg.get(&tid(n)).map(|t| t.name.as_str())
    }

    #[test]
    fn buffer_state_machine() {
        let mut buffer = NameEditBuffer::default();
        assert!(!buffer.is_editing());
        assert_eq!(buffer.take_commit(), None);

        buffer.input("a");
        buffer.input("ab");
        assert_eq!(buffer.draft(), Some("ab"));
        assert_eq!(buffer.take_commit(), Some("ab".to_owned()));
        assert_eq!(buffer, NameEditBuffer::Idle);
    }

    #[test]
    fn typing_does_not_touch_registry() {
        let mut reg = registry();
        let mut edits = NameEdits::new();

        edits.input(tid(1), "t");
        edits.input(tid(1), "to");
        assert_eq!(name_of(&reg, 1), Some("tongue"));
        assert_eq!(edits.draft(&tid(1)), Some("to"));

        let committed = edits.blur(tid(1), &mut reg);
        assert_eq!(committed.map(|t| t.name), Some("to".to_owned()));
        assert_eq!(name_of(&reg, 1), Some("to"));
        assert!(!edits.is_editing(&tid(1)));
    }

    #[test]
    fn blur_while_idle_is_noop() {
        let mut reg = registry();
        let before = reg.clone();
        let mut edits = NameEdits::new();
        assert!(edits.blur(tid(1), &mut reg).is_none());
        assert_eq!(reg, before);
    }

    #[test]
    fn discard_leaves_registry_unchanged() {
        let mut reg = registry();
        let mut edits = NameEdits::new();
        edits.input(tid(1), "jaw");
        assert!(edits.discard(&tid(1)));
        assert!(edits.blur(tid(1), &mut reg).is_none());
        assert_eq!(name_of(&reg, 1), Some("tongue"));
    }

    #[test]
    fn rows_are_independent() {
        let mut reg = registry();
        let mut edits = NameEdits::new();
        edits.input(tid(1), "one");
        edits.input(tid(2), "two");

        assert!(edits.blur(tid(2), &mut reg).is_some());
        assert_eq!(name_of(&reg, 2), Some("two"));
        assert_eq!(name_of(&reg, 1), Some("tongue"));
        assert_eq!(edits.draft(&tid(1)), Some("one"));
    }

    #[test]
    fn commit_merges_into_current_registry_copy() {
        let mut reg = registry();
        let mut edits = NameEdits::new();
        edits.input(tid(1), "renamed");

        // Color changes while the name is still being typed.
        let recolored = Trace::new(tid(1), TraceColor::Green).with_name("tongue");
        reg.upsert(recolored);

        assert!(edits.blur(tid(1), &mut reg).is_some());
        let trace = reg.get(&tid(1)).cloned();
        assert_eq!(
            trace.map(|t| (t.name, t.color)),
            Some(("renamed".to_owned(), TraceColor::Green))
        );
    }

    #[test]
    fn blur_after_removal_commits_nothing() {
        let mut reg = registry();
        let mut edits = NameEdits::new();
        edits.input(tid(1), "ghost");
        reg.remove(&tid(1));

        assert!(edits.blur(tid(1), &mut reg).is_none());
        assert!(!reg.contains(&tid(1)));
        assert!(!edits.is_editing(&tid(1)));
    }

    #[test]
    fn display_value_prefers_draft() {
        let reg = registry();
        let mut edits = NameEdits::new();
        let Some(trace) = reg.get(&tid(1)) else {
            return;
        };
        assert_eq!(edits.display_value(trace), "tongue");
        edits.input(tid(1), "");
        assert_eq!(edits.display_value(trace), "");
    }
}
