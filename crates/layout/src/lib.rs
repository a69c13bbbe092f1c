//! Turns invoice records into a positioned stream of draw instructions.
//!
//! The engine is a pure function of its inputs plus the surface it draws on:
//! configuration and layout cursors are explicit values, never global state.

pub mod address;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod ledger;

pub use self::address::format_address;
pub use self::config::LayoutConfig;
pub use self::cursor::{LayoutCursor, reconcile};
pub use self::engine::{InvoiceContext, InvoiceLayoutEngine};
pub use self::ledger::Ledger;

// Re-export the types that appear in the engine's public signatures
pub use tally_render_core::{PageSurface, RenderError};
pub use tally_types::{InvoiceHeader, InvoiceTotals, PartyInfo, TaxPercent};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod test_utils;
