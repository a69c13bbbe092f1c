use crate::config::InvoiceConfig;
use crate::error::PipelineError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tally_layout::{InvoiceContext, InvoiceLayoutEngine, LayoutConfig};
use tally_render_core::{DrawInstruction, PageSurface, RecordingSurface};
use tally_render_lopdf::LopdfSurface;
use tally_types::InvoiceTotals;

/// Configures and validates an `InvoicePipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: InvoiceConfig,
    layout: LayoutConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: InvoiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the page geometry used by the layout engine.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn build(self) -> Result<InvoicePipeline, PipelineError> {
        let context = self.config.to_context()?;
        Ok(InvoicePipeline {
            context,
            engine: InvoiceLayoutEngine::new(self.layout),
            output: self.config.output,
        })
    }
}

/// Renders invoices for one validated configuration.
#[derive(Debug, Clone)]
pub struct InvoicePipeline {
    context: InvoiceContext,
    engine: InvoiceLayoutEngine,
    output: PathBuf,
}

impl InvoicePipeline {
    pub fn context(&self) -> &InvoiceContext {
        &self.context
    }

    /// The configured output path.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Renders `records` onto any surface.
    pub fn render<S: PageSurface + ?Sized>(
        &self,
        records: &[Vec<String>],
        surface: &mut S,
    ) -> Result<InvoiceTotals, PipelineError> {
        Ok(self.engine.render(&self.context, records, surface)?)
    }

    /// Writes the invoice PDF to `writer` and hands the writer back.
    pub fn generate<W: Write>(
        &self,
        records: &[Vec<String>],
        writer: W,
    ) -> Result<(InvoiceTotals, W), PipelineError> {
        let mut surface = LopdfSurface::new(writer);
        let totals = self.render(records, &mut surface)?;
        Ok((totals, surface.into_inner()))
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        records: &[Vec<String>],
        path: P,
    ) -> Result<InvoiceTotals, PipelineError> {
        let output_path = path.as_ref();
        if let Some(parent_dir) = output_path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
        let file = fs::File::create(output_path)?;
        let (totals, _) = self.generate(records, io::BufWriter::new(file))?;
        log::info!("Wrote {}", output_path.display());
        Ok(totals)
    }

    /// Lays out the invoice without producing a PDF and returns the
    /// instructions that would have been drawn.
    pub fn dump_instructions(
        &self,
        records: &[Vec<String>],
    ) -> Result<Vec<DrawInstruction>, PipelineError> {
        let mut surface = RecordingSurface::default();
        self.render(records, &mut surface)?;
        Ok(surface.into_instructions())
    }
}
