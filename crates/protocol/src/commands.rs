use serde::{Deserialize, Serialize};

use crate::color::TraceColor;
use crate::ids::AnnotationId;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for the annotation surface.
/// Renderers consume the list sequentially; each command carries all the
/// data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a point marker centered on `center`.
    DrawMarker {
        center: Point,
        radius: f64,
        fill: TraceColor,
        outline: ThemeToken,
        /// Logical identity for hit-testing / hover.
        annotation_id: AnnotationId,
    },

    /// Draw a filled rectangle.
    DrawRect { rect: Rect, color: ThemeToken },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Begin a logical group (e.g. one trace's markers).
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}
