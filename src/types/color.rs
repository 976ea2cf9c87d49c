use egui::Color32;
use image::Rgb;

/// Which stored QR colour a picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Foreground,
    Background,
}

impl ColorTarget {
    pub fn picker_title(&self) -> &'static str {
        match self {
            ColorTarget::Foreground => "Choose QR Code foreground color",
            ColorTarget::Background => "Choose QR Code background color",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTarget::Foreground => "Foreground: ",
            ColorTarget::Background => "Background: ",
        }
    }
}

/// An open colour picker. The stored colour only changes on confirm.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    pub target: ColorTarget,
    pub color: Color32,
}

impl ColorPicker {
    pub fn new(target: ColorTarget, initial: Rgb<u8>) -> Self {
        Self {
            target,
            color: rgb_to_color32(initial),
        }
    }

    pub fn selected(&self) -> Rgb<u8> {
        color32_to_rgb(self.color)
    }
}

pub fn rgb_to_color32(color: Rgb<u8>) -> Color32 {
    let [r, g, b] = color.0;
    Color32::from_rgb(r, g, b)
}

pub fn color32_to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_starts_from_stored_color() {
        let picker = ColorPicker::new(ColorTarget::Background, Rgb([12, 34, 56]));
        assert_eq!(picker.color, Color32::from_rgb(12, 34, 56));
        assert_eq!(picker.selected(), Rgb([12, 34, 56]));
    }
}
