use serde::{Deserialize, Serialize};
use ultratrace_protocol::{TraceColor, TraceId};

/// A named, colored category that point annotations are tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Assigned once at creation; never changes.
    pub id: TraceId,
    /// Display name. May be empty.
    pub name: String,
    pub color: TraceColor,
    /// Hidden traces keep their annotations but are not drawn.
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl Trace {
    /// A freshly added trace: empty name, visible.
    pub fn new(id: TraceId, color: TraceColor) -> Self {
        Self {
            id,
            name: String::new(),
            color,
            visible: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_color(mut self, color: TraceColor) -> Self {
        self.color = color;
        self
    }
}
