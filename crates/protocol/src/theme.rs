use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
///
/// Trace colors are not tokens; they come from [`crate::TraceColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    /// Frame around the image surface.
    Border,

    // Image surface
    CanvasBackground,
    CanvasGridLine,

    // Markers
    MarkerOutline,
    MarkerShadow,

    /// Fill behind the active trace's row.
    SelectionHighlight,
}
