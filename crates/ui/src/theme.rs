use ultratrace_protocol::{ThemeToken, TraceColor};

#[derive(Debug, Clone, Copy)]
struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Rgba {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => dark_visuals(),
            Self::Light => light_visuals(),
        }
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> Rgba {
    // Catppuccin Mocha
    use ThemeToken::*;
    match token {
        Background => Rgba::rgb(0x11, 0x11, 0x1b), // Crust
        Border => Rgba::rgb(0x31, 0x32, 0x44),     // Surface0

        CanvasBackground => Rgba::rgb(0x1e, 0x1e, 0x2e), // Base
        CanvasGridLine => Rgba::rgb(0x31, 0x32, 0x44),

        MarkerOutline => Rgba::rgb(0xcd, 0xd6, 0xf4),
        MarkerShadow => Rgba::rgba(0x11, 0x11, 0x1b, 140),

        SelectionHighlight => Rgba::rgba(0x89, 0xb4, 0xfa, 80),
    }
}

fn resolve_light(token: ThemeToken) -> Rgba {
    use ThemeToken::*;
    match token {
        Background => Rgba::rgb(255, 255, 255),
        Border => Rgba::rgb(210, 210, 220),

        CanvasBackground => Rgba::rgb(250, 250, 252),
        CanvasGridLine => Rgba::rgb(225, 225, 232),

        MarkerOutline => Rgba::rgb(20, 20, 30),
        MarkerShadow => Rgba::rgba(0, 0, 0, 60),

        SelectionHighlight => Rgba::rgba(66, 135, 245, 60),
    }
}

/// Fill color for a trace. The palette is the same in both modes apart from
/// `Black`, which would vanish on the dark canvas.
pub fn trace_color(color: TraceColor, mode: ThemeMode) -> egui::Color32 {
    use TraceColor::*;
    let rgba = match color {
        Red => Rgba::rgb(0xdb, 0x28, 0x28),
        Orange => Rgba::rgb(0xf2, 0x71, 0x1c),
        Yellow => Rgba::rgb(0xfb, 0xbd, 0x08),
        Olive => Rgba::rgb(0xb5, 0xcc, 0x18),
        Green => Rgba::rgb(0x21, 0xba, 0x45),
        Teal => Rgba::rgb(0x00, 0xb5, 0xad),
        Blue => Rgba::rgb(0x21, 0x85, 0xd0),
        Violet => Rgba::rgb(0x64, 0x35, 0xc9),
        Purple => Rgba::rgb(0xa3, 0x33, 0xc8),
        Pink => Rgba::rgb(0xe0, 0x39, 0x97),
        Brown => Rgba::rgb(0xa5, 0x67, 0x3f),
        Grey => Rgba::rgb(0x76, 0x76, 0x76),
        Black if mode == ThemeMode::Dark => Rgba::rgb(0x45, 0x47, 0x5a),
        Black => Rgba::rgb(0x1b, 0x1c, 0x1d),
    };
    rgba.to_color32()
}

fn dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x18, 0x18, 0x25);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.faint_bg_color = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x45, 0x47, 0x5a);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x58, 0x5b, 0x70);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 60);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x89, 0xb4, 0xfa));
    v.error_fg_color = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    v
}

fn light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(250, 250, 252);
    v.window_fill = egui::Color32::from_rgb(255, 255, 255);
    v.faint_bg_color = egui::Color32::from_rgb(245, 245, 248);
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(230, 230, 235);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(220, 220, 228);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(50, 110, 220);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(50, 110, 220, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(50, 110, 220));
    v.error_fg_color = egui::Color32::from_rgb(211, 47, 47);
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trace_color_is_opaque() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            for color in TraceColor::ALL {
                assert_eq!(trace_color(color, mode).a(), 255);
            }
        }
    }

    #[test]
    fn selection_highlight_is_translucent() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let color = resolve(ThemeToken::SelectionHighlight, mode);
            assert!(color.a() > 0 && color.a() < 255);
        }
    }

    #[test]
    fn black_is_lifted_on_dark() {
        assert_ne!(
            trace_color(TraceColor::Black, ThemeMode::Dark),
            trace_color(TraceColor::Black, ThemeMode::Light)
        );
    }
}
