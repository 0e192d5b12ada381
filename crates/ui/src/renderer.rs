use egui::{CornerRadius, Pos2, Rect, Stroke};
use ultratrace_protocol::{RenderCommand, ThemeToken};

use crate::theme::{self, ThemeMode};

/// Paint a command list into `painter`.
///
/// Command coordinates are relative to `offset`, the top-left pixel of the
/// drawing area.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) {
    let to_screen = |x: f64, y: f64| Pos2::new(x as f32 + offset.x, y as f32 + offset.y);

    for cmd in commands {
        match cmd {
            RenderCommand::DrawMarker {
                center,
                radius,
                fill,
                outline,
                ..
            } => {
                let c = to_screen(center.x, center.y);
                let r = *radius as f32;
                let shadow = theme::resolve(ThemeToken::MarkerShadow, mode);
                painter.circle_filled(c + egui::vec2(1.0, 1.5), r, shadow);
                painter.circle(
                    c,
                    r,
                    theme::trace_color(*fill, mode),
                    Stroke::new(1.5, theme::resolve(*outline, mode)),
                );
            }

            RenderCommand::DrawRect { rect, color } => {
                let min = to_screen(rect.x, rect.y);
                let size = egui::vec2(rect.w as f32, rect.h as f32);
                if size.x < 0.5 || size.y < 0.5 {
                    continue;
                }
                let egui_rect = Rect::from_min_size(min, size);
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }
                painter.rect_filled(egui_rect, CornerRadius::ZERO, theme::resolve(*color, mode));
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [to_screen(from.x, from.y), to_screen(to.x, to.y)],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups carry no paint of their own
            }
        }
    }
}
