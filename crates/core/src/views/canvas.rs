use ultratrace_protocol::{Point, Rect, RenderCommand, ThemeToken, Viewport};

/// Background for the annotation surface when no image is loaded: a filled
/// square with `divisions` evenly spaced grid lines on each axis, framed by
/// a border.
pub fn render_canvas(viewport: &Viewport, divisions: u32) -> Vec<RenderCommand> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(divisions as usize * 2 + 7);
    commands.push(RenderCommand::BeginGroup {
        id: "canvas".into(),
        label: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(viewport.x, viewport.y, viewport.width, viewport.height),
        color: ThemeToken::CanvasBackground,
    });

    for i in 1..divisions {
        let pct = f64::from(i) / f64::from(divisions) * 100.0;
        let top = viewport.project(pct, 0.0);
        let bottom = viewport.project(pct, 100.0);
        let left = viewport.project(0.0, pct);
        let right = viewport.project(100.0, pct);
        commands.push(RenderCommand::DrawLine {
            from: top,
            to: bottom,
            color: ThemeToken::CanvasGridLine,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawLine {
            from: left,
            to: right,
            color: ThemeToken::CanvasGridLine,
            width: 1.0,
        });
    }

    let corners = [
        viewport.project(0.0, 0.0),
        viewport.project(100.0, 0.0),
        viewport.project(100.0, 100.0),
        viewport.project(0.0, 100.0),
    ];
    for (i, from) in corners.iter().enumerate() {
        commands.push(RenderCommand::DrawLine {
            from: *from,
            to: corners[(i + 1) % corners.len()],
            color: ThemeToken::Border,
            width: 1.0,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Convert a pointer position in viewport pixels into percentage
/// coordinates, or `None` when it lies outside the viewport. A collapsed
/// viewport contains no positions at all.
pub fn hit_to_percent(viewport: &Viewport, pos: Point) -> Option<(f64, f64)> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    let (x, y) = viewport.unproject(pos);
    let range = 0.0..=100.0;
    (range.contains(&x) && range.contains(&y)).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_with(cmds: &[RenderCommand], token: ThemeToken) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { color, .. } if *color == token))
            .count()
    }

    #[test]
    fn grid_line_count() {
        let cmds = render_canvas(&Viewport::new(400.0, 400.0), 4);
        assert_eq!(lines_with(&cmds, ThemeToken::CanvasGridLine), 6);
        assert_eq!(lines_with(&cmds, ThemeToken::Border), 4);
    }

    #[test]
    fn single_division_has_only_the_frame() {
        let cmds = render_canvas(&Viewport::new(400.0, 400.0), 1);
        assert_eq!(lines_with(&cmds, ThemeToken::CanvasGridLine), 0);
        assert_eq!(cmds.len(), 7);
    }

    #[test]
    fn collapsed_canvas_draws_nothing() {
        assert!(render_canvas(&Viewport::new(0.0, 300.0), 4).is_empty());
    }

    #[test]
    fn hit_inside_and_outside() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(hit_to_percent(&vp, Point::new(100.0, 25.0)), Some((50.0, 25.0)));
        assert_eq!(hit_to_percent(&vp, Point::new(201.0, 25.0)), None);
        assert_eq!(hit_to_percent(&vp, Point::new(10.0, -1.0)), None);
    }

    #[test]
    fn collapsed_viewport_never_hits() {
        let anywhere = [Point::new(0.0, 0.0), Point::new(500.0, -40.0)];
        for vp in [Viewport::new(0.0, 0.0), Viewport::new(0.0, 50.0), Viewport::new(50.0, 0.0)] {
            for pos in anywhere {
                assert_eq!(hit_to_percent(&vp, pos), None);
            }
        }
    }
}
