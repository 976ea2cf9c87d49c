use crate::dialogs::{Dialogs, NativeDialogs};
use crate::error::Result;
use crate::types::app_state::{AppStateRequest, AppearanceMode};
use crate::types::image::blank_preview;
use crate::types::{AppState, ImageData};
use crate::ui::UI;
use eframe::egui;
use egui::{Margin, TextureHandle};

pub struct QrCodeApp<D: Dialogs = NativeDialogs> {
    state: AppState,
    dialogs: D,
    blank_preview: Option<TextureHandle>,
    preview: Option<ImageData>,
}

impl Default for QrCodeApp {
    fn default() -> Self {
        Self::with_dialogs(NativeDialogs)
    }
}

impl QrCodeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let ctx = &cc.egui_ctx;
        crate::ui::styles::init_styles(ctx);
        Self::default()
    }
}

impl<D: Dialogs> QrCodeApp<D> {
    pub fn with_dialogs(dialogs: D) -> Self {
        Self {
            state: AppState::default(),
            dialogs,
            blank_preview: None,
            preview: None,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(dropped_file) = dropped_files.first()
            && let Some(path) = &dropped_file.path
        {
            self.state.request(AppStateRequest::LoadDroppedImage { path: path.clone() });
        }
    }

    fn handle_requests(&mut self, ctx: &egui::Context) {
        let Some(request) = self.state.pending_app_state_request.take() else {
            return;
        };

        let dialogs: &mut dyn Dialogs = &mut self.dialogs;
        let result: Result<()> = match request {
            AppStateRequest::LoadImage => self.state.load_image(dialogs),
            AppStateRequest::LoadDroppedImage { path } => self.state.load_image_from(path),
            AppStateRequest::SaveImage => self.state.save_image(dialogs),
            AppStateRequest::GenerateCode => self.state.generate_code(dialogs),
            AppStateRequest::ReadCode => self.state.read_code(),
            AppStateRequest::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                Ok(())
            }
        };

        if let Err(e) = result {
            log::error!("Operation failed: {e}");
            self.dialogs.show_error("Error", &e.to_string());
        }
    }

    /// Re-upload the preview texture when the image has changed
    fn update_preview(&mut self, ctx: &egui::Context) {
        let Some(image) = &self.state.current_image else {
            return;
        };
        let revision = self.state.image_revision;
        if self.preview.as_ref().is_some_and(|p| p.revision == revision) {
            return;
        }
        self.preview = Some(ImageData::from_image(image, revision, ctx));
        log::debug!("Preview texture updated (revision {revision})");
    }

    fn preview_texture(&mut self, ctx: &egui::Context) -> TextureHandle {
        if let Some(preview) = &self.preview {
            return preview.texture.clone();
        }
        let size = self.state.config.preview_size;
        self.blank_preview
            .get_or_insert_with(|| {
                ImageData::from_image(&blank_preview(size), 0, ctx).texture
            })
            .clone()
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.state.appearance_mode {
            AppearanceMode::Dark => egui::Visuals::dark(),
            AppearanceMode::Light => egui::Visuals::light(),
            AppearanceMode::System => match ctx.system_theme() {
                Some(egui::Theme::Dark) => egui::Visuals::dark(),
                Some(egui::Theme::Light) => egui::Visuals::light(),
                None => egui::Visuals::dark(),
            },
        };
        if ctx.style().visuals != visuals {
            ctx.set_visuals(visuals);
        }
    }
}

impl<D: Dialogs> eframe::App for QrCodeApp<D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        // Handle drag and drop first
        self.handle_dropped_files(ctx);

        self.handle_requests(ctx);

        self.update_preview(ctx);
        let preview = self.preview_texture(ctx);

        // Top（Menu）
        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(0, 4))
                .show(ui, |ui| {
                    UI::draw_header(ui, &mut self.state);
                });
        });

        // Bottom（Configuration）
        egui::TopBottomPanel::bottom("config_panel").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(0, 12))
                .show(ui, |ui| {
                    UI::draw_footer(ui, &mut self.state);
                });
        });

        // Main（Image, buttons, text）
        egui::CentralPanel::default().show(ctx, |ui| {
            UI::draw_main_content(ui, &mut self.state, &preview);
        });

        UI::draw_color_picker(ctx, &mut self.state);

        // Requests posted this frame are handled on the next one
        if self.state.pending_app_state_request.is_some() {
            ctx.request_repaint();
        }
    }
}
