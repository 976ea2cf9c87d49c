use super::styles;
use crate::types::{AppState, AppStateRequest};
use egui::{Color32, Pos2, Rect, TextureHandle, Vec2};

pub fn draw_main_content(ui: &mut egui::Ui, state: &mut AppState, preview: &TextureHandle) {
    let side = state.config.preview_size as f32;

    ui.horizontal_centered(|ui| {
        ui.add_space(20.0);
        draw_preview(ui, preview, side);
        ui.add_space(20.0);

        ui.vertical(|ui| {
            ui.add_space(side / 3.0);
            ui.scope(|ui| {
                styles::apply_action_button_style(ui);
                if ui.button("<< Convert").clicked() {
                    state.request(AppStateRequest::GenerateCode);
                }
                ui.add_space(8.0);
                if ui.button("Read >>").clicked() {
                    state.request(AppStateRequest::ReadCode);
                }
            });
        });

        ui.add_space(20.0);
        ui.add_sized(
            Vec2::splat(side),
            egui::TextEdit::multiline(&mut state.text).desired_width(side),
        );
    });
}

fn draw_preview(ui: &mut egui::Ui, preview: &TextureHandle, side: f32) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
    let canvas = response.rect;

    painter.image(
        preview.id(),
        canvas,
        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
        Color32::WHITE,
    );
    painter.rect_stroke(
        canvas,
        0.0,
        egui::Stroke::new(1.0, Color32::from_gray(48)),
        egui::StrokeKind::Outside,
    );
}
