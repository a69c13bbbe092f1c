use serde::Serialize;
use std::path::PathBuf;
use tally_types::{Color, Font, Point, Rect};

/// Horizontal placement of text inside a cell. Text is always vertically
/// centred on the cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellInstruction {
    pub rect: Rect,
    pub text: String,
    pub font: Font,
    pub align: CellAlign,
    /// Stroke the cell outline.
    pub border: bool,
}

/// A positioned rendering command. Coordinates are millimetres from the
/// top-left corner of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawInstruction {
    Cell(CellInstruction),
    Line { from: Point, to: Point, width: f32 },
    Fill { rect: Rect, color: Color },
    Image { rect: Rect, path: PathBuf },
}

impl DrawInstruction {
    pub fn cell(rect: Rect, text: impl Into<String>, font: Font) -> Self {
        DrawInstruction::Cell(CellInstruction {
            rect,
            text: text.into(),
            font,
            align: CellAlign::Left,
            border: false,
        })
    }

    /// A bordered cell, as used by the line-item table.
    pub fn table_cell(rect: Rect, text: impl Into<String>, font: Font, align: CellAlign) -> Self {
        DrawInstruction::Cell(CellInstruction {
            rect,
            text: text.into(),
            font,
            align,
            border: true,
        })
    }

    pub fn as_cell(&self) -> Option<&CellInstruction> {
        match self {
            DrawInstruction::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    /// The area the instruction paints over, if it has one.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawInstruction::Cell(cell) => cell.rect,
            DrawInstruction::Fill { rect, .. } | DrawInstruction::Image { rect, .. } => *rect,
            DrawInstruction::Line { from, to, .. } => {
                let x = from.x.min(to.x);
                let y = from.y.min(to.y);
                Rect::new(x, y, (from.x - to.x).abs(), (from.y - to.y).abs())
            }
        }
    }
}
