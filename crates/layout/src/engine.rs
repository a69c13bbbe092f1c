//! The invoice layout engine.
//!
//! Rendering runs in fixed stages, each taking the cursor it starts from and
//! returning where the next stage continues:
//!
//! 1. header: logo, issuer name, optional company number, and the heading.
//!    The left column and the heading are reconciled into one start line.
//! 2. address column: issuer address and contact, then the "Bill To" block.
//! 3. metadata column: invoice number and date, to the right of the
//!    addresses. It is not reconciled with the address column.
//! 4. the line-item table and the totals block under its last two columns.
//! 5. footer.

use crate::address::format_address;
use crate::config::{LayoutConfig, TABLE_COLUMNS};
use crate::cursor::{LayoutCursor, reconcile};
use crate::ledger::{Ledger, format_money};
use std::path::PathBuf;
use tally_render_core::{CellAlign, DrawInstruction, PageSurface, RenderError};
use tally_types::{
    Color, ComputedLine, Font, FontStyle, InvoiceHeader, InvoiceTotals, PartyInfo, Point, Rect,
    TaxPercent,
};

pub const HEADING_TEXT: &str = "INVOICE";
pub const BILL_TO_TEXT: &str = "Bill To:";
pub const FOOTER_TEXT: &str =
    "Note: The tax invoice is computer generated and no signature is required.";
pub const TABLE_HEADERS: [&str; TABLE_COLUMNS] =
    ["No", "Description", "Quantity", "Unit Price ($)", "Price ($)"];
pub const TOTAL_LABELS: [&str; 3] = ["Subtotal", "Tax Amount", "Grand total"];

const COLUMN_ALIGN: [CellAlign; TABLE_COLUMNS] = [
    CellAlign::Center,
    CellAlign::Left,
    CellAlign::Center,
    CellAlign::Center,
    CellAlign::Center,
];

/// Everything about one invoice except its line items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceContext {
    pub header: InvoiceHeader,
    pub issuer: PartyInfo,
    pub recipient: PartyInfo,
    pub tax_percent: TaxPercent,
    pub logo: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceLayoutEngine {
    config: LayoutConfig,
}

impl InvoiceLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out the invoice on `surface` and finishes it.
    ///
    /// Malformed records are skipped and unparsable numbers count as zero, so
    /// the only failures are those reported by the surface.
    pub fn render<I, R, F, S>(
        &self,
        ctx: &InvoiceContext,
        items: I,
        surface: &mut S,
    ) -> Result<InvoiceTotals, RenderError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
        S: PageSurface + ?Sized,
    {
        let safe_width = self.config.margins.safe_width(surface.page_size());

        let address_top = self.draw_header(ctx, surface)?;
        let address_end = self.draw_addresses(ctx, address_top, safe_width, surface)?;
        self.draw_metadata(&ctx.header, address_top, safe_width, surface)?;

        let ledger = Ledger::from_records(items);
        let totals = ledger.totals(ctx.tax_percent);
        let widths = self.config.scaled_column_widths(safe_width);
        let table_top = address_end.down(self.config.table_margin);
        let cursor = self.draw_table(ledger.lines(), &widths, table_top, surface)?;
        let cursor = self.draw_totals(&totals, &widths, cursor, surface)?;
        self.draw_footer(cursor, safe_width, surface)?;

        surface.finish()?;
        log::info!(
            "Rendered invoice {:?}: {} line items, grand total {}",
            ctx.header.invoice_number,
            ledger.lines().len(),
            format_money(totals.grand_total)
        );
        Ok(totals)
    }

    /// Draws the header and returns the line the address block starts on.
    fn draw_header<S: PageSurface + ?Sized>(
        &self,
        ctx: &InvoiceContext,
        surface: &mut S,
    ) -> Result<LayoutCursor, RenderError> {
        let cfg = &self.config;
        if let Some(path) = &ctx.logo {
            surface.draw(DrawInstruction::Image {
                rect: cfg.logo_rect,
                path: path.clone(),
            })?;
        }

        let title_y = cfg.start_y + cfg.title_font.line_height() + cfg.gap;
        let mut left = LayoutCursor::new(cfg.margins.left, title_y);
        let mut last_font = cfg.title_font;
        surface.draw(DrawInstruction::cell(
            Rect::new(left.x, left.y, cfg.title_cell.width, cfg.title_cell.height),
            ctx.issuer.name.as_str(),
            cfg.title_font,
        ))?;

        let company_no = &ctx.header.company_registration_number;
        if !company_no.is_empty() {
            left = left.down(cfg.company_font.line_height() + cfg.gap);
            last_font = cfg.company_font;
            surface.draw(DrawInstruction::cell(
                Rect::new(left.x, left.y, cfg.title_cell.width, cfg.title_cell.height),
                format!("Company No : {}", company_no),
                cfg.company_font,
            ))?;
        }
        let left_bottom = left.y + last_font.line_height() + cfg.gap;

        let heading_y = title_y - cfg.heading_font.line_height();
        surface.draw(DrawInstruction::cell(
            Rect::new(
                cfg.heading_x,
                heading_y,
                cfg.heading_cell.width,
                cfg.heading_cell.height,
            ),
            HEADING_TEXT,
            cfg.heading_font,
        ))?;
        let heading_bottom = heading_y + cfg.gap;

        let top = reconcile(left_bottom, heading_bottom, cfg.section_margin);
        log::debug!(
            "Header columns end at {:.2} / {:.2}, addresses start at {:.2}",
            left_bottom,
            heading_bottom,
            top
        );
        Ok(LayoutCursor::new(cfg.margins.left, top))
    }

    /// Draws the issuer and recipient blocks in the left half of the page.
    /// Returns the cursor just below the last line.
    fn draw_addresses<S: PageSurface + ?Sized>(
        &self,
        ctx: &InvoiceContext,
        start: LayoutCursor,
        safe_width: f32,
        surface: &mut S,
    ) -> Result<LayoutCursor, RenderError> {
        let cfg = &self.config;
        let body = cfg.body_font;
        let line_height = body.line_height();
        let line_break = cfg.line_break();
        let width = safe_width / 2.0;

        let mut column = Column {
            cursor: start,
            width,
            line_height,
            line_break,
        };

        for line in format_address(&ctx.issuer.address) {
            column.line(surface, line, body)?;
        }
        column.put(
            surface,
            format!("Tel: {}", ctx.issuer.contact),
            body.with_style(FontStyle::Italic),
        )?;
        column.skip(cfg.breaks_after_issuer);

        let bold = body.with_style(FontStyle::Bold);
        column.put(surface, BILL_TO_TEXT, bold)?;
        let rule_y = column.cursor.y + line_height;
        surface.draw(DrawInstruction::Line {
            from: Point::new(start.x, rule_y),
            to: Point::new(start.x + width, rule_y),
            width: cfg.rule_width,
        })?;
        column.skip(1);
        column.line(surface, ctx.recipient.name.as_str(), bold)?;

        for line in format_address(&ctx.recipient.address) {
            column.line(surface, line, body)?;
        }
        column.put(
            surface,
            format!("Tel: {}", ctx.recipient.contact),
            body.with_style(FontStyle::Italic),
        )?;

        Ok(column.cursor.down(line_height))
    }

    /// Draws invoice number and date, starting on the same line as the
    /// address column.
    fn draw_metadata<S: PageSurface + ?Sized>(
        &self,
        header: &InvoiceHeader,
        start: LayoutCursor,
        safe_width: f32,
        surface: &mut S,
    ) -> Result<LayoutCursor, RenderError> {
        let cfg = &self.config;
        let font = cfg.body_font;
        let height = font.line_height();
        let width = cfg.metadata_cell_width;
        let mut cursor = LayoutCursor::new(safe_width / 2.0 + cfg.metadata_indent, start.y);

        let rows = [
            ("Invoice No.:", header.invoice_number.as_str()),
            ("Invoice Date:", header.invoice_date.as_str()),
        ];
        for (label, value) in rows {
            surface.draw(DrawInstruction::cell(
                Rect::new(cursor.x, cursor.y, width, height),
                label,
                font,
            ))?;
            surface.draw(DrawInstruction::cell(
                Rect::new(cursor.x + width, cursor.y, width, height),
                value,
                font,
            ))?;
            cursor = cursor.down(cfg.line_break());
        }
        Ok(cursor)
    }

    fn draw_table<S: PageSurface + ?Sized>(
        &self,
        lines: &[ComputedLine],
        widths: &[f32; TABLE_COLUMNS],
        start: LayoutCursor,
        surface: &mut S,
    ) -> Result<LayoutCursor, RenderError> {
        let cfg = &self.config;
        let body = cfg.body_font;
        let mut cursor = start;

        self.draw_row(
            &TABLE_HEADERS.map(String::from),
            widths,
            cursor,
            body.with_style(FontStyle::Bold),
            [CellAlign::Center; TABLE_COLUMNS],
            cfg.header_fill,
            surface,
        )?;
        cursor = cursor.down(cfg.row_height);

        for line in lines {
            let cells = [
                line.sequence.to_string(),
                line.item.description.clone(),
                line.item.quantity.to_string(),
                format_money(line.unit_price_rounded),
                format_money(line.line_total),
            ];
            self.draw_row(&cells, widths, cursor, body, COLUMN_ALIGN, cfg.row_fill, surface)?;
            cursor = cursor.down(cfg.row_height);
        }
        log::debug!("Table of {} rows ends at {:.2}", lines.len(), cursor.y);
        Ok(cursor)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_row<S: PageSurface + ?Sized>(
        &self,
        cells: &[String; TABLE_COLUMNS],
        widths: &[f32; TABLE_COLUMNS],
        start: LayoutCursor,
        font: Font,
        align: [CellAlign; TABLE_COLUMNS],
        fill: Color,
        surface: &mut S,
    ) -> Result<(), RenderError> {
        let mut cursor = start;
        for ((text, width), align) in cells.iter().zip(widths).zip(align) {
            let rect = Rect::new(cursor.x, cursor.y, *width, self.config.row_height);
            surface.draw(DrawInstruction::Fill { rect, color: fill })?;
            surface.draw(DrawInstruction::table_cell(rect, text.as_str(), font, align))?;
            cursor = cursor.right(*width);
        }
        Ok(())
    }

    /// Draws subtotal, tax and grand total under the last two columns.
    fn draw_totals<S: PageSurface + ?Sized>(
        &self,
        totals: &InvoiceTotals,
        widths: &[f32; TABLE_COLUMNS],
        start: LayoutCursor,
        surface: &mut S,
    ) -> Result<LayoutCursor, RenderError> {
        let cfg = &self.config;
        let font = cfg.body_font.with_style(FontStyle::Bold);
        let indent: f32 = widths[..3].iter().sum();
        let (label_width, value_width) = (widths[3], widths[4]);
        let mut cursor = start.with_x(cfg.margins.left + indent);

        let values = [totals.subtotal, totals.tax_amount, totals.grand_total];
        for (label, value) in TOTAL_LABELS.iter().zip(values) {
            let label_rect = Rect::new(cursor.x, cursor.y, label_width, cfg.row_height);
            let value_rect = Rect::new(
                cursor.x + label_width,
                cursor.y,
                value_width,
                cfg.row_height,
            );
            surface.draw(DrawInstruction::Fill {
                rect: label_rect,
                color: cfg.row_fill,
            })?;
            surface.draw(DrawInstruction::table_cell(
                label_rect,
                *label,
                font,
                CellAlign::Center,
            ))?;
            surface.draw(DrawInstruction::Fill {
                rect: value_rect,
                color: cfg.row_fill,
            })?;
            surface.draw(DrawInstruction::table_cell(
                value_rect,
                format_money(value),
                font,
                CellAlign::Center,
            ))?;
            cursor = cursor.down(cfg.row_height);
        }
        Ok(cursor.with_x(cfg.margins.left))
    }

    fn draw_footer<S: PageSurface + ?Sized>(
        &self,
        start: LayoutCursor,
        safe_width: f32,
        surface: &mut S,
    ) -> Result<LayoutCursor, RenderError> {
        let cfg = &self.config;
        let font = cfg.body_font;
        let cursor = start.down(cfg.line_break());
        surface.draw(DrawInstruction::cell(
            Rect::new(cursor.x, cursor.y, safe_width, font.line_height()),
            FOOTER_TEXT,
            font,
        ))?;
        Ok(cursor.down(font.line_height()))
    }
}

/// A single-column text flow with a fixed line pitch.
struct Column {
    cursor: LayoutCursor,
    width: f32,
    line_height: f32,
    line_break: f32,
}

impl Column {
    /// Draws a line of text at the cursor without moving it.
    fn put<S: PageSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: impl Into<String>,
        font: Font,
    ) -> Result<(), RenderError> {
        surface.draw(DrawInstruction::cell(
            Rect::new(self.cursor.x, self.cursor.y, self.width, self.line_height),
            text,
            font,
        ))
    }

    /// Draws a line of text and breaks to the next line.
    fn line<S: PageSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: impl Into<String>,
        font: Font,
    ) -> Result<(), RenderError> {
        self.put(surface, text, font)?;
        self.skip(1);
        Ok(())
    }

    fn skip(&mut self, breaks: usize) {
        self.cursor = self.cursor.down(self.line_break * breaks as f32);
    }
}
