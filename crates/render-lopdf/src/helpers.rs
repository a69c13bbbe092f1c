use crate::metrics::text_width_mm;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use tally_render_core::utils::flip_y;
use tally_render_core::{CellAlign, CellInstruction};
use tally_types::{Color, FontStyle, Point, Rect, mm_to_pt};

/// Horizontal gap between a left-aligned cell edge and its text.
pub(crate) const CELL_PADDING_MM: f32 = 1.0;
/// Baseline offset below the cell's vertical centre, as a share of the font size.
const BASELINE_SHIFT: f32 = 0.3;
/// Stroke width of cell borders.
const BORDER_WIDTH_MM: f32 = 0.2;

pub(crate) const FONT_STYLES: [FontStyle; 4] = [
    FontStyle::Regular,
    FontStyle::Bold,
    FontStyle::Italic,
    FontStyle::BoldItalic,
];

/// Resource name under which a font style is registered on the page.
pub(crate) fn font_resource_name(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
        FontStyle::BoldItalic => "F4",
    }
}

/// Characters WinAnsiEncoding places in 0x80..=0x9F, where Latin-1 has
/// control codes.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x80..=0x9F => b'?',
        code @ 0..=0xFF => code as u8,
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(ch, _)| *ch == c)
            .map_or(b'?', |(_, byte)| *byte),
    }
}

/// Encodes text for the WinAnsi-encoded standard fonts. Characters the
/// encoding has no glyph for are replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontStyle, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Builds the content stream of one page. Input coordinates are millimetres
/// from the top-left corner, output operands are points from the bottom-left.
pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub(crate) fn new(page_height_mm: f32) -> Self {
        Self {
            page_height: mm_to_pt(page_height_mm),
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    #[cfg(test)]
    pub(crate) fn operations(&self) -> &[Operation] {
        &self.content.operations
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn y(&self, y_mm: f32) -> f32 {
        flip_y(mm_to_pt(y_mm), self.page_height)
    }

    fn rect_operands(&self, rect: &Rect) -> Vec<Object> {
        vec![
            mm_to_pt(rect.x).into(),
            self.y(rect.bottom()).into(),
            mm_to_pt(rect.width).into(),
            mm_to_pt(rect.height).into(),
        ]
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width_mm: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        let width = mm_to_pt(width_mm);
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, style: FontStyle, size: f32) {
        if self.state.font != Some((style, size)) {
            self.push("Tf", vec![font_resource_name(style).into(), size.into()]);
            self.state.font = Some((style, size));
        }
    }

    pub(crate) fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.set_fill_color(color);
        let operands = self.rect_operands(rect);
        self.push("re", operands);
        self.push("f", vec![]);
    }

    pub(crate) fn draw_line(&mut self, from: Point, to: Point, width_mm: f32) {
        self.set_stroke(Color::BLACK, width_mm);
        self.push("m", vec![mm_to_pt(from.x).into(), self.y(from.y).into()]);
        self.push("l", vec![mm_to_pt(to.x).into(), self.y(to.y).into()]);
        self.push("S", vec![]);
    }

    pub(crate) fn draw_cell(&mut self, cell: &CellInstruction) {
        if cell.border {
            self.set_stroke(Color::BLACK, BORDER_WIDTH_MM);
            let operands = self.rect_operands(&cell.rect);
            self.push("re", operands);
            self.push("S", vec![]);
        }
        if cell.text.is_empty() {
            return;
        }

        let font_mm = cell.font.line_height();
        let dx = match cell.align {
            CellAlign::Left => CELL_PADDING_MM,
            CellAlign::Center => (cell.rect.width - text_width_mm(&cell.text, &cell.font)) / 2.0,
        };
        let baseline = cell.rect.y + cell.rect.height / 2.0 + BASELINE_SHIFT * font_mm;

        self.push("BT", vec![]);
        self.set_font(cell.font.style, cell.font.size_pt);
        self.set_fill_color(Color::BLACK);
        self.push(
            "Td",
            vec![mm_to_pt(cell.rect.x + dx).into(), self.y(baseline).into()],
        );
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&cell.text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Paints a registered image XObject scaled into `rect`.
    pub(crate) fn draw_image(&mut self, rect: &Rect, resource_name: &str) {
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                mm_to_pt(rect.width).into(),
                0.0_f32.into(),
                0.0_f32.into(),
                mm_to_pt(rect.height).into(),
                mm_to_pt(rect.x).into(),
                self.y(rect.bottom()).into(),
            ],
        );
        self.push("Do", vec![Object::Name(resource_name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }
}
