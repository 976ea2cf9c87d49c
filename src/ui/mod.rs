mod color_picker;
mod footer;
mod header;
mod image_viewer;
pub mod styles;

use crate::types::AppState;
use egui::TextureHandle;

pub struct UI;

impl UI {
    pub fn draw_main_content(ui: &mut egui::Ui, state: &mut AppState, preview: &TextureHandle) {
        image_viewer::draw_main_content(ui, state, preview)
    }

    pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
        header::draw_header(ui, state)
    }

    pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
        footer::draw_footer(ui, state)
    }

    pub fn draw_color_picker(ctx: &egui::Context, state: &mut AppState) {
        color_picker::draw_color_picker(ctx, state)
    }
}
