use tally_types::FontStyle;

pub const BASE_FONT_FAMILY: &str = "Helvetica";

/// Get the standard PDF font name for a style of the base family
pub fn get_styled_font_name(base_name: &str, style: FontStyle) -> String {
    let mut name = base_name.to_string();
    if style != FontStyle::Regular {
        name.push('-');
        match style {
            FontStyle::BoldItalic => name.push_str("BoldOblique"),
            FontStyle::Bold => name.push_str("Bold"),
            FontStyle::Italic => name.push_str("Oblique"),
            FontStyle::Regular => {}
        }
    }
    name
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
