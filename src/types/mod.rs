pub mod app_state;
pub mod color;
pub mod image;

// Re-export all public types for convenience
pub use app_state::{AppState, AppStateRequest, AppearanceMode};
pub use color::{ColorPicker, ColorTarget};
pub use self::image::ImageData;
