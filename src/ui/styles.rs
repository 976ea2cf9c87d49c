use egui::Color32;
pub const COLOR_TINT: Color32 = Color32::from_rgb(240, 100, 156);
pub const COLOR_TINT_ACTIVE: Color32 = Color32::from_rgb(131, 100, 144);

pub const CONFIG_FONT_SIZE: f32 = 20.0;
pub const SWATCH_SIZE: f32 = 20.0;

/// Registers the custom text style in both the dark and the light style, the
/// system theme may switch between them at any frame.
pub fn init_styles(ctx: &egui::Context) {
    ctx.all_styles_mut(|style| {
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        style.text_styles.insert(
            egui::TextStyle::Name("Config".into()),
            egui::FontId::new(CONFIG_FONT_SIZE, egui::FontFamily::Proportional),
        );
    });
}

pub trait RichTextExt {
    fn config(self) -> Self;
}

impl RichTextExt for egui::RichText {
    fn config(self) -> Self {
        self.text_style(egui::TextStyle::Name("Config".into()))
    }
}

/// Tinted look for the convert/read buttons
pub fn apply_action_button_style(ui: &mut egui::Ui) {
    let style = ui.style_mut();

    // Inactive state
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.inactive.weak_bg_fill = COLOR_TINT;

    // Hovered state
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, COLOR_TINT_ACTIVE);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.hovered.weak_bg_fill = COLOR_TINT;

    // Active state
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, COLOR_TINT_ACTIVE);
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.weak_bg_fill = COLOR_TINT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppState;

    fn run_footer_frame(theme: egui::Theme) {
        let ctx = egui::Context::default();
        init_styles(&ctx);
        let mut state = AppState::default();

        let input = egui::RawInput {
            system_theme: Some(theme),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label(egui::RichText::new(state.export_size_label()).config());
                super::super::footer::draw_footer(ui, &mut state);
            });
        });
    }

    #[test]
    fn test_config_style_resolves_in_light_theme() {
        run_footer_frame(egui::Theme::Light);
    }

    #[test]
    fn test_config_style_resolves_in_dark_theme() {
        run_footer_frame(egui::Theme::Dark);
    }
}
