//! Single-page PDF invoices from CSV line items.
//!
//! ```no_run
//! use tally::{InvoiceConfig, PipelineBuilder, records};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), tally::PipelineError> {
//! let input = records::validate_input_path(Path::new("items.csv"))?;
//! let rows = records::read_records_from_path(&input)?;
//! let pipeline = PipelineBuilder::new()
//!     .with_config(InvoiceConfig::default())
//!     .build()?;
//! pipeline.generate_to_file(&rows, pipeline.output_path())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod records;

pub use config::{ConfigOverrides, InvoiceConfig};
pub use error::PipelineError;
pub use pipeline::{InvoicePipeline, PipelineBuilder};

pub use tally_layout::{InvoiceContext, LayoutConfig, format_address};
pub use tally_render_core::{DrawInstruction, PageSurface, RecordingSurface, RenderError};
pub use tally_types::{InvoiceHeader, InvoiceTotals, PartyInfo, TaxPercent};
