//! Core rendering abstractions for invoice output.
//!
//! This crate provides the contract between the layout engine and an output backend:
//! - `DrawInstruction`, the positioned commands the engine emits
//! - the `PageSurface` trait a backend implements to consume them
//! - `RecordingSurface`, a backend that keeps the instruction stream in memory
//! - error types and font-name utilities shared by backends

mod error;
mod instruction;
mod recording;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use instruction::{CellAlign, CellInstruction, DrawInstruction};
pub use recording::RecordingSurface;
pub use traits::PageSurface;
