use super::styles::{self, RichTextExt};
use crate::types::color::rgb_to_color32;
use crate::types::{AppState, ColorTarget};
use egui::{Color32, RichText, Sense, Vec2};

pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        egui::Grid::new("config_grid")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                draw_size_controls(ui, state);
                ui.end_row();

                draw_color_selector(ui, state, ColorTarget::Foreground);
                draw_color_selector(ui, state, ColorTarget::Background);
                ui.end_row();
            });
    });
}

fn draw_size_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(RichText::new(state.export_size_label()).config());

    let range = &state.config.export_size_range;
    let mut value = state.export_size as f32;
    let response = ui.add(
        egui::Slider::new(&mut value, *range.start() as f32..=*range.end() as f32)
            .step_by(state.config.export_size_step as f64)
            .show_value(false),
    );
    if response.changed() {
        state.on_size_slider_changed(value);
    }
}

fn draw_color_selector(ui: &mut egui::Ui, state: &mut AppState, target: ColorTarget) {
    ui.horizontal(|ui| {
        let label = ui.add(
            egui::Label::new(RichText::new(target.label()).config()).sense(Sense::click()),
        );

        let (swatch, painter) =
            ui.allocate_painter(Vec2::splat(styles::SWATCH_SIZE), Sense::click());
        painter.rect_filled(swatch.rect, 0.0, rgb_to_color32(state.color(target)));
        painter.rect_stroke(
            swatch.rect,
            0.0,
            egui::Stroke::new(1.0, Color32::from_gray(48)),
            egui::StrokeKind::Middle,
        );

        if label.clicked() || swatch.clicked() {
            match target {
                ColorTarget::Foreground => state.select_foreground(),
                ColorTarget::Background => state.select_background(),
            }
        }
        label.on_hover_cursor(egui::CursorIcon::PointingHand);
    });
}
