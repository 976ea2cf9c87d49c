use crate::types::{AppState, AppStateRequest, AppearanceMode};

pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
    egui::MenuBar::new().ui(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open").clicked() {
                state.request(AppStateRequest::LoadImage);
                ui.close();
            }
            if ui.button("Save").clicked() {
                state.request(AppStateRequest::SaveImage);
                ui.close();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                state.request(AppStateRequest::Quit);
                ui.close();
            }
        });

        ui.menu_button("View", |ui| {
            for mode in AppearanceMode::all() {
                if ui
                    .radio_value(&mut state.appearance_mode, *mode, mode.display_name())
                    .clicked()
                {
                    ui.close();
                }
            }
        });

        if let Some(path) = &state.current_file {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "📄 {}",
                    path.file_name().unwrap_or_default().to_string_lossy()
                ));
            });
        }
    });
}
