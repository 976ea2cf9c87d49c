use image::{DynamicImage, Rgb};
use std::path::PathBuf;

use super::color::{ColorPicker, ColorTarget};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppearanceMode {
    System,
    Light,
    Dark,
}

impl Default for AppearanceMode {
    fn default() -> Self {
        AppearanceMode::System
    }
}

impl AppearanceMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppearanceMode::System => "System",
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
        }
    }

    pub fn all() -> &'static [AppearanceMode] {
        &[
            AppearanceMode::System,
            AppearanceMode::Light,
            AppearanceMode::Dark,
        ]
    }
}

// User actions posted by the UI and dispatched once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum AppStateRequest {
    LoadImage,
    LoadDroppedImage { path: PathBuf },
    SaveImage,
    GenerateCode,
    ReadCode,
    Quit,
}

pub struct AppState {
    pub config: AppConfig,

    // Image management
    pub current_file: Option<PathBuf>,
    pub current_image: Option<DynamicImage>,
    /// Bumped every time `current_image` is replaced
    pub image_revision: u64,

    // QR settings
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
    pub export_size: u32,

    pub text: String,

    // UI state
    pub color_picker: Option<ColorPicker>,
    pub appearance_mode: AppearanceMode,

    pub pending_app_state_request: Option<AppStateRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            current_file: None,
            current_image: None,
            image_revision: 0,

            foreground: config.foreground,
            background: config.background,
            export_size: config.clamp_export_size(config.initial_export_size),

            text: String::new(),

            color_picker: None,
            appearance_mode: AppearanceMode::default(),

            pending_app_state_request: None,

            config,
        }
    }

    pub fn export_size_label(&self) -> String {
        format!("Image size: {}", self.export_size)
    }

    pub fn color(&self, target: ColorTarget) -> Rgb<u8> {
        match target {
            ColorTarget::Foreground => self.foreground,
            ColorTarget::Background => self.background,
        }
    }

    pub fn request(&mut self, request: AppStateRequest) {
        self.pending_app_state_request = Some(request);
    }

    /// Swap in a fully built image; nothing partial ever lands here
    pub(crate) fn replace_image(&mut self, image: DynamicImage) {
        self.current_image = Some(image);
        self.image_revision += 1;
    }
}
