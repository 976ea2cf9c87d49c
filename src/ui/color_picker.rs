use crate::types::AppState;
use egui::color_picker::{Alpha, color_picker_color32};

/// Modal picker; OK confirms, Cancel or closing the window discards
pub fn draw_color_picker(ctx: &egui::Context, state: &mut AppState) {
    let Some(picker) = state.color_picker.as_mut() else {
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new(picker.target.picker_title())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            color_picker_color32(ui, &mut picker.color, Alpha::Opaque);
            ui.separator();
            ui.horizontal(|ui| {
                confirmed = ui.button("OK").clicked();
                cancelled = ui.button("Cancel").clicked();
            });
        });

    if confirmed {
        state.confirm_color_picker();
    } else if cancelled || !open {
        state.cancel_color_picker();
    }
}
