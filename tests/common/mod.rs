pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use tally::{InvoiceConfig, InvoicePipeline, InvoiceTotals, PipelineBuilder, PipelineError};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub totals: InvoiceTotals,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A configuration with fixed values, so output does not depend on today's date.
pub fn fixed_config() -> InvoiceConfig {
    let mut config = InvoiceConfig::default();
    config.header.invoice_number = "INV-2024-001".into();
    config.header.invoice_date = "2024-03-01".into();
    config
}

pub fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|field| field.to_string()).collect())
        .collect()
}

pub fn pipeline(config: InvoiceConfig) -> Result<InvoicePipeline, PipelineError> {
    PipelineBuilder::new().with_config(config).build()
}

/// Generates the invoice into memory and parses it back.
pub fn generate_pdf(
    config: InvoiceConfig,
    records: &[Vec<String>],
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logging();
    let (totals, cursor) = pipeline(config)?.generate(records, Cursor::new(Vec::new()))?;
    let bytes = cursor.into_inner();
    let doc = LopdfDocument::load_mem(&bytes)?;
    Ok(GeneratedPdf { bytes, doc, totals })
}
