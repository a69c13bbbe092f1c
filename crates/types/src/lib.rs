pub mod color;
pub mod document;
pub mod font;
pub mod geometry;

pub use color::Color;
pub use document::{
    ComputedLine, InvoiceHeader, InvoiceTotals, LineItem, PartyInfo, TaxPercent, TaxPercentError,
};
pub use font::{Font, FontStyle, PT_PER_MM, mm_to_pt, pt_to_mm};
pub use geometry::{Margins, Point, Rect, Size};
