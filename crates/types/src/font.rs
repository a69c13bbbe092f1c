//! Font selection and point/millimetre conversion.

use serde::Serialize;

/// Points per millimetre (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

/// A style and a size in points. The family is fixed (Helvetica).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub style: FontStyle,
    pub size_pt: f32,
}

impl Font {
    pub fn new(style: FontStyle, size_pt: f32) -> Self {
        Self { style, size_pt }
    }

    pub fn regular(size_pt: f32) -> Self {
        Self::new(FontStyle::Regular, size_pt)
    }

    pub fn bold(size_pt: f32) -> Self {
        Self::new(FontStyle::Bold, size_pt)
    }

    pub fn with_style(self, style: FontStyle) -> Self {
        Self { style, ..self }
    }

    /// The font size expressed in millimetres, used as the line height.
    pub fn line_height(&self) -> f32 {
        pt_to_mm(self.size_pt)
    }
}
