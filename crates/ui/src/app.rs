use eframe::egui;
use ultratrace_core::model::Session;
use ultratrace_core::views::{TraceRow, canvas, markers, trace_list};
use ultratrace_core::{SessionConfig, SessionError};
use ultratrace_protocol::{Geometry, Point, SessionEvent, ThemeToken, TraceId, Viewport};

use crate::renderer;
use crate::theme::{self, ThemeMode};

const GRID_DIVISIONS: u32 = 10;

/// One UI gesture, recorded while widgets run and applied after the frame.
#[derive(Debug)]
enum Gesture {
    Session(SessionEvent),
    TypeName { id: TraceId, text: String },
    BlurName(TraceId),
    DiscardName(TraceId),
}

/// Main application state.
pub struct UltraTraceApp {
    session: Session,
    theme_mode: ThemeMode,
    /// Last rejected event, shown in the status bar.
    error: Option<String>,
}

impl UltraTraceApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SessionConfig) -> Self {
        let theme_mode = ThemeMode::Dark;
        cc.egui_ctx.set_visuals(theme_mode.visuals());
        Self {
            session: Session::new(config),
            theme_mode,
            error: None,
        }
    }

    /// Apply the frame's gestures in the order they were recorded.
    fn apply(&mut self, gestures: Vec<Gesture>) {
        for gesture in gestures {
            let result = match gesture {
                Gesture::Session(event) => self.session.dispatch(event).map(drop),
                Gesture::TypeName { id, text } => self.session.type_trace_name(id, text),
                Gesture::BlurName(id) => {
                    if let Some(trace) = self.session.blur_trace_name(id) {
                        tracing::debug!(trace_id = %trace.id, name = %trace.name, "name committed");
                    }
                    Ok(())
                }
                Gesture::DiscardName(id) => {
                    self.session.discard_trace_name(&id);
                    Ok(())
                }
            };
            debug_assert!(result.is_ok(), "session rejected a ui gesture: {result:?}");
            if let Err(err) = result {
                self.report(&err);
            }
        }
    }

    fn report(&mut self, err: &SessionError) {
        tracing::error!(error = %err, "session rejected event");
        self.error = Some(err.to_string());
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("ultratrace");
            ui.separator();

            // Playback has no model behind it yet.
            for label in ["⏮", "▶", "⏭"] {
                ui.add_enabled(false, egui::Button::new(label))
                    .on_disabled_hover_text("Playback is not available");
            }

            ui.separator();

            let theme_label = match self.theme_mode {
                ThemeMode::Dark => "🌙 Dark",
                ThemeMode::Light => "☀ Light",
            };
            if ui.button(theme_label).clicked() {
                self.theme_mode = self.theme_mode.toggled();
                ui.ctx().set_visuals(self.theme_mode.visuals());
            }
        });
    }

    fn trace_panel(&self, ui: &mut egui::Ui, gestures: &mut Vec<Gesture>) {
        ui.horizontal(|ui| {
            ui.heading("Traces");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+").on_hover_text("Add trace").clicked() {
                    gestures.push(Gesture::Session(SessionEvent::AddTrace));
                }
            });
        });
        ui.separator();

        let rows = trace_list::trace_rows(&self.session);
        if rows.is_empty() {
            ui.weak("No traces yet. Add one to start annotating.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in &rows {
                self.trace_row(ui, row, gestures);
            }
        });
    }

    fn trace_row(&self, ui: &mut egui::Ui, row: &TraceRow, gestures: &mut Vec<Gesture>) {
        let fill = if row.selected {
            theme::resolve(ThemeToken::SelectionHighlight, self.theme_mode)
        } else {
            egui::Color32::TRANSPARENT
        };
        egui::Frame::new()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::symmetric(4, 2))
            .show(ui, |ui| self.trace_row_widgets(ui, row, gestures));
    }

    fn trace_row_widgets(&self, ui: &mut egui::Ui, row: &TraceRow, gestures: &mut Vec<Gesture>) {
        let id = row.trace.id;
        ui.horizontal(|ui| {
            if ui.radio(row.selected, "").clicked() {
                // Clicking the active row again deselects it.
                let next = (!row.selected).then_some(id);
                gestures.push(Gesture::Session(SessionEvent::SelectTrace { id: next }));
            }

            let swatch = egui::Button::new("")
                .fill(theme::trace_color(row.trace.color, self.theme_mode))
                .min_size(egui::vec2(18.0, 18.0));
            if ui
                .add(swatch)
                .on_hover_text(format!("{} (click to change)", row.trace.color))
                .clicked()
            {
                gestures.push(Gesture::Session(SessionEvent::RecolorTrace {
                    id,
                    color: row.trace.color.cycle_next(),
                }));
            }

            let mut text = row.name_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id_salt(("trace-name", id))
                    .hint_text("Trace name")
                    .desired_width(120.0),
            );
            if response.changed() {
                gestures.push(Gesture::TypeName { id, text });
            }
            if response.lost_focus() {
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    gestures.push(Gesture::DiscardName(id));
                } else {
                    gestures.push(Gesture::BlurName(id));
                }
            }

            ui.weak(row.annotation_count.to_string());

            let mut visible = row.trace.visible;
            if ui
                .checkbox(&mut visible, "")
                .on_hover_text("Show markers")
                .changed()
            {
                gestures.push(Gesture::Session(SessionEvent::SetTraceVisible { id, visible }));
            }

            if ui.small_button("−").on_hover_text("Remove trace").clicked() {
                gestures.push(Gesture::Session(SessionEvent::RemoveTrace { id }));
            }
        });
    }

    fn canvas(&self, ui: &mut egui::Ui, gestures: &mut Vec<Gesture>) {
        let available = ui.available_rect_before_wrap();
        let side = available.width().min(available.height()).max(0.0);
        let rect = egui::Rect::from_center_size(available.center(), egui::vec2(side, side));
        let response = ui.allocate_rect(rect, egui::Sense::click());

        let viewport = Viewport::new(f64::from(side), f64::from(side));
        let to_local = |pos: egui::Pos2| {
            Point::new(f64::from(pos.x - rect.left()), f64::from(pos.y - rect.top()))
        };

        let painter = ui.painter_at(rect);
        renderer::render_commands(
            &painter,
            &canvas::render_canvas(&viewport, GRID_DIVISIONS),
            rect.min,
            self.theme_mode,
        );
        renderer::render_commands(
            &painter,
            &markers::render_markers(&self.session, &viewport),
            rect.min,
            self.theme_mode,
        );

        if let Some(pos) = response.hover_pos()
            && let Some((x, y)) = canvas::hit_to_percent(&viewport, to_local(pos))
        {
            let reach = markers::MARKER_RADIUS / viewport.width * 100.0;
            if let Some(annotation) = self.session.nearest_visible(x, y, reach) {
                let name = self
                    .session
                    .trace(&annotation.trace_id)
                    .map_or("(removed trace)", |t| t.name.as_str());
                let text = format!(
                    "{name}\n{:.1}%, {:.1}%",
                    annotation.geometry.x(),
                    annotation.geometry.y()
                );
                response.clone().on_hover_text_at_pointer(text);
            }
        }

        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
            && let Some((x, y)) = canvas::hit_to_percent(&viewport, to_local(pos))
        {
            match Geometry::point(x, y) {
                Ok(geometry) => {
                    gestures.push(Gesture::Session(SessionEvent::GeometryCommitted { geometry }));
                }
                Err(err) => tracing::warn!(error = %err, "click outside the image"),
            }
        }
    }

    fn status_line(&self) -> String {
        let active = self
            .session
            .selected_id()
            .and_then(|id| self.session.trace(&id))
            .map_or_else(
                || "none (clicks are ignored)".to_owned(),
                |t| {
                    if t.name.is_empty() {
                        "(unnamed)".to_owned()
                    } else {
                        t.name.clone()
                    }
                },
            );
        format!(
            "Traces: {} | Annotations: {} | Active: {active}",
            self.session.registry().len(),
            self.session.log().len(),
        )
    }
}

impl eframe::App for UltraTraceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut gestures = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                    if ui.small_button("✕").clicked() {
                        self.error = None;
                    }
                } else {
                    ui.label(self.status_line());
                }
            });
        });

        egui::SidePanel::left("traces")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.trace_panel(ui, &mut gestures));

        let background = theme::resolve(ThemeToken::Background, self.theme_mode);
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background))
            .show(ctx, |ui| self.canvas(ui, &mut gestures));

        self.apply(gestures);
    }
}
