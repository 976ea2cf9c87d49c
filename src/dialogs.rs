//! Native modal dialogs used by the session operations

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tga", "tiff", "webp"];

/// File pickers and message boxes. `None` from a picker means the user
/// cancelled.
pub trait Dialogs {
    fn pick_image_file(&mut self) -> Option<PathBuf>;
    fn pick_save_path(&mut self) -> Option<PathBuf>;
    fn show_error(&mut self, title: &str, message: &str);
}

pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_image_file(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Load QRCode")
            .add_filter("PNG", &["png"])
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save QRCode")
            .set_file_name("qrcode.png")
            .add_filter("PNG", &["png"])
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .save_file()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
