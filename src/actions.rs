//! The user-triggered operations on the session state.
//!
//! Each runs to completion on the UI thread. User input problems are shown
//! through [`Dialogs::show_error`] and leave the state untouched; library
//! failures come back as `Err` without having mutated anything.

use crate::dialogs::Dialogs;
use crate::error::{Error, Result};
use crate::exporter::save_resized_image;
use crate::qr::{QrDecoder, QrEncoder};
use crate::types::image::load_preview;
use crate::types::{AppState, ColorPicker, ColorTarget};
use image::DynamicImage;
use std::path::PathBuf;

fn report_user_error(dialogs: &mut dyn Dialogs, error: Error) {
    log::warn!("{error}");
    dialogs.show_error("Error", &error.to_string());
}

impl AppState {
    pub fn select_foreground(&mut self) {
        self.select_color(ColorTarget::Foreground);
    }

    pub fn select_background(&mut self) {
        self.select_color(ColorTarget::Background);
    }

    /// Open the picker seeded with the stored colour
    pub fn select_color(&mut self, target: ColorTarget) {
        self.color_picker = Some(ColorPicker::new(target, self.color(target)));
    }

    pub fn confirm_color_picker(&mut self) {
        let Some(picker) = self.color_picker.take() else {
            return;
        };
        let color = picker.selected();
        match picker.target {
            ColorTarget::Foreground => self.foreground = color,
            ColorTarget::Background => self.background = color,
        }
        log::info!("{:?} color set to {:?}", picker.target, color.0);
    }

    pub fn cancel_color_picker(&mut self) {
        self.color_picker = None;
    }

    pub fn on_size_slider_changed(&mut self, value: f32) {
        // `as` saturates negatives and NaN to 0, the clamp does the rest
        self.export_size = self.config.clamp_export_size(value as u32);
    }

    pub fn load_image(&mut self, dialogs: &mut dyn Dialogs) -> Result<()> {
        let Some(path) = dialogs.pick_image_file() else {
            return Ok(());
        };
        self.load_image_from(path)
    }

    /// Load without a dialog, used for the open dialog and dropped files
    pub fn load_image_from(&mut self, path: PathBuf) -> Result<()> {
        let image = load_preview(&path, self.config.preview_size, self.config.resampling)?;
        log::info!("Loaded image: {}", path.display());
        self.current_file = Some(path);
        self.replace_image(image);
        Ok(())
    }

    pub fn save_image(&mut self, dialogs: &mut dyn Dialogs) -> Result<()> {
        let Some(image) = &self.current_image else {
            report_user_error(dialogs, Error::NoImage);
            return Ok(());
        };
        let Some(path) = dialogs.pick_save_path() else {
            return Ok(());
        };
        save_resized_image(&path, image, self.export_size, self.config.resampling)
    }

    pub fn generate_code(&mut self, dialogs: &mut dyn Dialogs) -> Result<()> {
        let data = self.text.trim();
        if data.is_empty() {
            report_user_error(dialogs, Error::NoText);
            return Ok(());
        }

        let encoder =
            QrEncoder::from_config(&self.config).with_colors(self.foreground, self.background);
        let qr = encoder.encode_string(data)?;
        let size = self.config.preview_size;
        let image = DynamicImage::ImageRgb8(qr).resize_exact(size, size, self.config.resampling);

        log::info!("Generated QR code for {} bytes of text", data.len());
        // current_file is left alone: Read >> keeps decoding the last loaded file
        self.replace_image(image);
        Ok(())
    }

    /// Replace the text with the symbol decoded from the last loaded file
    pub fn read_code(&mut self) -> Result<()> {
        let text = match &self.current_file {
            Some(path) => {
                let decoded = QrDecoder::new().decode_file(path)?;
                if decoded.is_none() {
                    log::warn!("No QR code found in {}", path.display());
                }
                decoded.unwrap_or_default()
            }
            None => {
                log::warn!("Read requested with no loaded file");
                String::new()
            }
        };
        log::info!("Read {} characters from QR code", text.len());
        self.text = text;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::testing::FakeDialogs;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "qrcode_gui_actions_{name}_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_qr_file(path: &Path, text: &str) {
        QrEncoder::new().encode_string(text).unwrap().save(path).unwrap();
    }

    fn close_to(actual: Rgb<u8>, expected: Rgb<u8>) -> bool {
        actual
            .0
            .iter()
            .zip(expected.0.iter())
            .all(|(a, e)| a.abs_diff(*e) <= 2)
    }

    #[test]
    fn test_generate_produces_preview_sized_image() {
        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::default();
        state.text = "Hello, QR".to_string();

        state.generate_code(&mut dialogs).unwrap();

        let image = state.current_image.as_ref().unwrap();
        assert_eq!((image.width(), image.height()), (300, 300));
        assert_eq!(state.image_revision, 1);
        assert!(dialogs.errors.is_empty());
    }

    #[test]
    fn test_generate_with_blank_text_reports_error() {
        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::default();
        state.text = "  \n\t ".to_string();

        state.generate_code(&mut dialogs).unwrap();

        assert!(state.current_image.is_none());
        assert_eq!(state.image_revision, 0);
        assert_eq!(
            dialogs.errors,
            vec![(
                "Error".to_string(),
                "There is no text to convert to QR Code!".to_string()
            )]
        );
    }

    #[test]
    fn test_generate_with_empty_text_keeps_previous_image() {
        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::default();
        state.text = "first".to_string();
        state.generate_code(&mut dialogs).unwrap();
        let before = state.current_image.clone();

        state.text.clear();
        state.generate_code(&mut dialogs).unwrap();

        assert_eq!(state.current_image, before);
        assert_eq!(state.image_revision, 1);
        assert_eq!(dialogs.errors.len(), 1);
    }

    #[test]
    fn test_generate_does_not_touch_current_file() {
        let dir = temp_dir("generate_file");
        let path = dir.join("loaded.png");
        write_qr_file(&path, "on disk");

        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::default();
        state.load_image_from(path.clone()).unwrap();
        state.text = "in memory".to_string();
        state.generate_code(&mut dialogs).unwrap();

        assert_eq!(state.current_file.as_deref(), Some(path.as_path()));
        state.read_code().unwrap();
        assert_eq!(state.text, "on disk");
    }

    #[test]
    fn test_save_without_image_never_opens_dialog() {
        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::saving(Some(PathBuf::from("/tmp/never.png")));

        state.save_image(&mut dialogs).unwrap();

        assert_eq!(dialogs.save_calls, 0);
        assert_eq!(
            dialogs.errors,
            vec![(
                "Error".to_string(),
                "There is no QR Code image to convert to text!".to_string()
            )]
        );
    }

    #[test]
    fn test_save_cancel_writes_nothing() {
        let mut state = AppState::default();
        state.text = "cancel me".to_string();
        state.generate_code(&mut FakeDialogs::default()).unwrap();

        let mut dialogs = FakeDialogs::saving(None);
        state.save_image(&mut dialogs).unwrap();

        assert_eq!(dialogs.save_calls, 1);
        assert!(dialogs.errors.is_empty());
    }

    #[test]
    fn test_save_uses_export_size_and_default_extension() {
        let dir = temp_dir("save_size");
        let mut state = AppState::default();
        state.text = "sized".to_string();
        state.generate_code(&mut FakeDialogs::default()).unwrap();
        state.on_size_slider_changed(850.0);

        let mut dialogs = FakeDialogs::saving(Some(dir.join("sized")));
        state.save_image(&mut dialogs).unwrap();

        let saved = image::open(dir.join("sized.png")).unwrap();
        assert_eq!((saved.width(), saved.height()), (850, 850));
    }

    #[test]
    fn test_slider_updates_size_and_label() {
        let mut state = AppState::default();
        for value in [200.0, 750.0, 2000.0] {
            state.on_size_slider_changed(value);
            let expected = value as u32;
            assert_eq!(state.export_size, expected);
            assert!(state.export_size_label().contains(&expected.to_string()));
        }
    }

    #[test]
    fn test_slider_clamps_out_of_range_values() {
        let mut state = AppState::default();
        state.on_size_slider_changed(-5.0);
        assert_eq!(state.export_size, 200);
        state.on_size_slider_changed(99999.0);
        assert_eq!(state.export_size, 2000);
        state.on_size_slider_changed(412.7);
        assert_eq!(state.export_size, 412);
    }

    #[test]
    fn test_generate_save_read_round_trip() {
        let dir = temp_dir("round_trip");
        let path = dir.join("round_trip.png");
        let text = "Round trip through the file system";

        let mut state = AppState::default();
        state.text = text.to_string();
        state.generate_code(&mut FakeDialogs::default()).unwrap();
        state.on_size_slider_changed(600.0);
        state
            .save_image(&mut FakeDialogs::saving(Some(path.clone())))
            .unwrap();

        let mut reader = AppState::default();
        reader.load_image_from(path).unwrap();
        reader.read_code().unwrap();
        assert_eq!(reader.text, text);
    }

    #[test]
    fn test_load_then_read() {
        let dir = temp_dir("load_read");
        let path = dir.join("code.png");
        write_qr_file(&path, "loaded text");

        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::opening(Some(path.clone()));
        state.load_image(&mut dialogs).unwrap();

        assert_eq!(state.current_file.as_deref(), Some(path.as_path()));
        let image = state.current_image.as_ref().unwrap();
        assert_eq!((image.width(), image.height()), (300, 300));

        state.text = "stale".to_string();
        state.read_code().unwrap();
        assert_eq!(state.text, "loaded text");
    }

    #[test]
    fn test_read_without_symbol_clears_text() {
        let dir = temp_dir("no_symbol");
        let path = dir.join("plain.png");
        RgbImage::from_pixel(120, 80, Rgb([30, 160, 90]))
            .save(&path)
            .unwrap();

        let mut state = AppState::default();
        state.load_image_from(path).unwrap();
        state.text = "old".to_string();
        state.read_code().unwrap();
        assert_eq!(state.text, "");
    }

    #[test]
    fn test_read_without_loaded_file_clears_text() {
        let mut state = AppState::default();
        state.text = "something".to_string();
        state.read_code().unwrap();
        assert!(state.text.is_empty());
    }

    #[test]
    fn test_load_cancel_is_noop() {
        let mut state = AppState::default();
        let mut dialogs = FakeDialogs::opening(None);
        state.load_image(&mut dialogs).unwrap();
        assert_eq!(dialogs.open_calls, 1);
        assert!(state.current_file.is_none());
        assert!(state.current_image.is_none());
    }

    #[test]
    fn test_load_malformed_file_fails_without_mutation() {
        let dir = temp_dir("malformed");
        let path = dir.join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let mut state = AppState::default();
        assert!(matches!(
            state.load_image_from(path),
            Err(Error::Image(_))
        ));
        assert!(state.current_file.is_none());
        assert!(state.current_image.is_none());
    }

    #[test]
    fn test_foreground_color_used_by_next_generate() {
        let fg = Rgb([150, 20, 60]);
        let mut state = AppState::default();
        state.select_foreground();
        state.color_picker.as_mut().unwrap().color = egui::Color32::from_rgb(150, 20, 60);
        state.confirm_color_picker();
        assert_eq!(state.foreground, fg);
        assert!(state.color_picker.is_none());

        state.text = "colour".to_string();
        state.generate_code(&mut FakeDialogs::default()).unwrap();
        let image = state.current_image.as_ref().unwrap().to_rgb8();

        // Centre of the top-left finder pattern, border stays background
        assert!(close_to(*image.get_pixel(66, 66), fg));
        assert!(close_to(*image.get_pixel(2, 2), Rgb([255, 255, 255])));
    }

    #[test]
    fn test_color_picker_cancel_keeps_color() {
        let mut state = AppState::default();
        state.select_background();
        state.color_picker.as_mut().unwrap().color = egui::Color32::from_rgb(1, 2, 3);
        state.cancel_color_picker();

        assert!(state.color_picker.is_none());
        assert_eq!(state.background, Rgb([255, 255, 255]));
    }
}
