use tally_types::{Color, Font, FontStyle, Margins, Rect, Size};

/// Number of columns in the line-item table.
pub const TABLE_COLUMNS: usize = 5;

/// Fixed geometry of the invoice page. Lengths are millimetres, font sizes
/// are points.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub margins: Margins,
    /// Vertical position the header is measured from. The page starts with
    /// the cursor at the default 10 mm margin, before `margins.top` applies.
    pub start_y: f32,
    /// Spacing added after each header line.
    pub gap: f32,
    pub logo_rect: Rect,

    pub title_font: Font,
    pub title_cell: Size,
    pub company_font: Font,
    pub heading_font: Font,
    pub heading_x: f32,
    pub heading_cell: Size,
    /// Space between the reconciled header columns and the address block.
    pub section_margin: f32,

    pub body_font: Font,
    /// Extra space added to the body line height on every line break.
    pub line_spacing: f32,
    /// Line breaks between the issuer's contact line and "Bill To:".
    pub breaks_after_issuer: usize,
    pub rule_width: f32,

    /// Offset of the metadata column from the middle of the safe area.
    pub metadata_indent: f32,
    pub metadata_cell_width: f32,

    pub table_margin: f32,
    pub row_height: f32,
    /// Column widths for an A4 page. Scaled proportionally to other widths.
    pub column_widths: [f32; TABLE_COLUMNS],
    pub header_fill: Color,
    pub row_fill: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margins: Margins::new(10.0, 20.0, 10.0),
            start_y: 10.0,
            gap: 2.0,
            logo_rect: Rect::new(0.0, 0.0, 65.0, 25.0),
            title_font: Font::bold(16.0),
            title_cell: Size::new(40.0, 10.0),
            company_font: Font::new(FontStyle::BoldItalic, 12.0),
            heading_font: Font::bold(32.0),
            heading_x: 130.0,
            heading_cell: Size::new(100.0, 40.0),
            section_margin: 10.0,
            body_font: Font::regular(12.0),
            line_spacing: 1.0,
            breaks_after_issuer: 3,
            rule_width: 0.2,
            metadata_indent: 30.0,
            metadata_cell_width: 30.0,
            table_margin: 10.0,
            row_height: 10.0,
            column_widths: [10.0, 75.0, 25.0, 40.0, 40.0],
            header_fill: Color::gray(200),
            row_fill: Color::WHITE,
        }
    }
}

impl LayoutConfig {
    /// Distance between two body lines.
    pub fn line_break(&self) -> f32 {
        self.body_font.line_height() + self.line_spacing
    }

    /// Column widths stretched to fill `safe_width`, keeping their proportions.
    pub fn scaled_column_widths(&self, safe_width: f32) -> [f32; TABLE_COLUMNS] {
        let total: f32 = self.column_widths.iter().sum();
        if total <= 0.0 {
            return self.column_widths;
        }
        let scale = safe_width / total;
        self.column_widths.map(|w| w * scale)
    }
}
