use crate::engine::{InvoiceContext, InvoiceLayoutEngine};
use tally_render_core::{DrawInstruction, PageSurface, RecordingSurface, RenderError};
use tally_types::{InvoiceHeader, InvoiceTotals, PartyInfo, Size, TaxPercent};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_context() -> InvoiceContext {
    InvoiceContext {
        header: InvoiceHeader {
            invoice_number: "INV-0042".into(),
            invoice_date: "2024-03-01".into(),
            company_registration_number: String::new(),
        },
        issuer: PartyInfo::new(
            "Your Company Inc",
            "Unit 1, Lingkaran Syed Putra, Mid Valley City, 59200 Kuala Lumpur, Wilayah Persekutuan Kuala Lumpur",
            "03-9876 5432",
        ),
        recipient: PartyInfo::new(
            "Target Company Inc",
            "Unit 999, Lingkaran Syed Putra, Mid Valley City, 59200 Kuala Lumpur",
            "03-1234 5678",
        ),
        tax_percent: TaxPercent::default(),
        logo: None,
    }
}

pub fn sample_records() -> Vec<Vec<String>> {
    [
        vec!["2", "Widget", "10.00"],
        vec!["bad"],
        vec!["1", "Gadget", "5.005"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(String::from).collect())
    .collect()
}

/// Renders into a fresh A4 recording surface.
pub fn render_recorded(
    ctx: &InvoiceContext,
    records: &[Vec<String>],
) -> (InvoiceTotals, RecordingSurface) {
    let mut surface = RecordingSurface::new(Size::A4);
    let totals = InvoiceLayoutEngine::default()
        .render(ctx, records, &mut surface)
        .expect("recording surface never fails");
    (totals, surface)
}

/// Finds the first cell with exactly this text.
pub fn find_cell<'a>(surface: &'a RecordingSurface, text: &str) -> Option<&'a DrawInstruction> {
    surface
        .instructions()
        .iter()
        .find(|i| i.as_cell().is_some_and(|c| c.text == text))
}

/// A surface whose destination cannot be written.
pub struct UnwritableSurface {
    pub drawn: usize,
}

impl PageSurface for UnwritableSurface {
    fn page_size(&self) -> Size {
        Size::A4
    }

    fn draw(&mut self, _instruction: DrawInstruction) -> Result<(), RenderError> {
        self.drawn += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        Err(RenderError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "destination is read-only",
        )))
    }
}
