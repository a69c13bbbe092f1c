//! PDF output for the invoice layout engine.
//!
//! `LopdfSurface` implements `PageSurface` on top of the lopdf object model.
//! It produces a single page using the standard Helvetica fonts, so no font
//! files are embedded.

mod helpers;
pub mod metrics;
mod renderer;

pub use helpers::to_win_ansi;
pub use renderer::LopdfSurface;
