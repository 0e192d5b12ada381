use ultratrace_protocol::{RenderCommand, ThemeToken, Viewport};

use crate::model::Session;

/// Marker radius in logical pixels.
pub const MARKER_RADIUS: f64 = 8.0;

/// Render every visible annotation as a point marker.
///
/// Commands follow log order, so later annotations paint over earlier ones.
/// Marker fill comes from [`Session::marker_color`], which applies the
/// session's color policy.
pub fn render_markers(session: &Session, viewport: &Viewport) -> Vec<RenderCommand> {
    let log = session.log();
    if log.is_empty() || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(log.len() + 2);
    commands.push(RenderCommand::BeginGroup {
        id: "markers".into(),
        label: Some("Markers".into()),
    });

    for annotation in log.iter() {
        if !session.is_annotation_visible(annotation) {
            continue;
        }
        commands.push(RenderCommand::DrawMarker {
            center: viewport.project(annotation.geometry.x(), annotation.geometry.y()),
            radius: MARKER_RADIUS,
            fill: session.marker_color(annotation),
            outline: ThemeToken::MarkerOutline,
            annotation_id: annotation.id,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
