pub mod color;
pub mod commands;
pub mod events;
pub mod ids;
pub mod theme;
pub mod types;

pub use color::{TraceColor, UnknownColor};
pub use commands::RenderCommand;
pub use events::SessionEvent;
pub use ids::{AnnotationId, TraceId};
pub use theme::ThemeToken;
pub use types::{Axis, Geometry, GeometryError, Point, Rect, SelectorKind, Viewport};
