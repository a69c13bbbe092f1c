use crate::engine::{FOOTER_TEXT, HEADING_TEXT, InvoiceLayoutEngine, TABLE_HEADERS};
use crate::test_utils::*;
use crate::{LayoutConfig, reconcile};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tally_render_core::{CellAlign, DrawInstruction, RecordingSurface, RenderError};
use tally_types::{Color, Size};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Texts of the cells drawn after the table header, in order.
fn table_texts(surface: &RecordingSurface) -> Vec<&str> {
    let texts = surface.cell_texts();
    let start = texts
        .iter()
        .position(|t| *t == TABLE_HEADERS[0])
        .expect("table header present");
    texts[start + TABLE_HEADERS.len()..].to_vec()
}

#[test]
fn rows_are_numbered_by_emitted_position() {
    init_logging();
    let (totals, surface) = render_recorded(&sample_context(), &sample_records());

    assert_eq!(
        table_texts(&surface),
        vec![
            "1", "Widget", "2", "10.00", "20.00", //
            "2", "Gadget", "1", "5.01", "5.01", //
            "Subtotal", "25.01", "Tax Amount", "1.25", "Grand total", "26.26", //
            FOOTER_TEXT,
        ]
    );
    assert_eq!(totals.subtotal, dec("25.01"));
    assert_eq!(totals.tax_amount, dec("1.25"));
    assert_eq!(totals.grand_total, dec("26.26"));
    assert!(surface.is_finished());
}

#[test]
fn empty_item_list_yields_header_only_table() {
    let (totals, surface) = render_recorded(&sample_context(), &[]);

    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.grand_total, Decimal::ZERO);
    assert_eq!(
        table_texts(&surface),
        vec!["Subtotal", "0.00", "Tax Amount", "0.00", "Grand total", "0.00", FOOTER_TEXT]
    );
}

#[test]
fn every_record_invalid_degrades_to_empty_table() {
    let records = vec![vec!["only".to_string(), "two".to_string()], vec![]];
    let (totals, surface) = render_recorded(&sample_context(), &records);
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(table_texts(&surface)[..2], ["Subtotal", "0.00"]);
}

#[test]
fn rendering_is_repeatable() {
    let ctx = sample_context();
    let (first_totals, first) = render_recorded(&ctx, &sample_records());
    let (second_totals, second) = render_recorded(&ctx, &sample_records());
    assert_eq!(first_totals, second_totals);
    assert_eq!(first.instructions(), second.instructions());
}

#[test]
fn table_starts_below_the_whole_address_column() {
    let mut ctx = sample_context();
    ctx.recipient.address = "Building Number 1, Some Long Street Name, Another District, \
        Yet Another Line Here, Final Long Line Of Address"
        .into();
    let (_, surface) = render_recorded(&ctx, &sample_records());
    let config = LayoutConfig::default();

    let header_cell = find_cell(&surface, TABLE_HEADERS[0]).unwrap().bounds();
    let lowest_address_line = surface
        .instructions()
        .iter()
        .take_while(|i| i.as_cell().map(|c| c.text.as_str()) != Some(TABLE_HEADERS[0]))
        .filter_map(DrawInstruction::as_cell)
        .filter(|c| c.rect.x == config.margins.left)
        .map(|c| c.rect.bottom())
        .fold(f32::MIN, f32::max);

    let tel = find_cell(&surface, "Tel: 03-1234 5678").unwrap().bounds();
    assert!((header_cell.y - (tel.bottom() + config.table_margin)).abs() < 1e-4);
    assert!(header_cell.y >= lowest_address_line);
}

#[test]
fn address_block_starts_at_reconciled_header_line() {
    let config = LayoutConfig::default();
    let (_, surface) = render_recorded(&sample_context(), &sample_records());

    let title_y = config.start_y + config.title_font.line_height() + config.gap;
    let left = title_y + config.title_font.line_height() + config.gap;
    let heading = title_y - config.heading_font.line_height() + config.gap;
    let expected = reconcile(left, heading, config.section_margin);

    let first_line = find_cell(&surface, "Unit 1, Lingkaran Syed Putra").unwrap().bounds();
    assert!((first_line.y - expected).abs() < 1e-4);
    assert_eq!(first_line.x, config.margins.left);
    assert_eq!(first_line.width, 95.0);

    // The metadata column shares the start line but not the address column's cursor.
    let number_label = find_cell(&surface, "Invoice No.:").unwrap().bounds();
    assert_eq!(number_label.y, first_line.y);
    assert_eq!(number_label.x, 95.0 + config.metadata_indent);
    let date_label = find_cell(&surface, "Invoice Date:").unwrap().bounds();
    assert!((date_label.y - (number_label.y + config.line_break())).abs() < 1e-4);
    assert!(find_cell(&surface, "INV-0042").is_some());
    assert!(find_cell(&surface, "2024-03-01").is_some());
}

#[test]
fn heading_sits_above_the_issuer_name() {
    let config = LayoutConfig::default();
    let (_, surface) = render_recorded(&sample_context(), &[]);
    let heading = find_cell(&surface, HEADING_TEXT).unwrap();
    let name = find_cell(&surface, "Your Company Inc").unwrap();
    assert_eq!(heading.bounds().x, config.heading_x);
    assert!(heading.bounds().y < name.bounds().y);
    assert_eq!(heading.as_cell().unwrap().font, config.heading_font);
}

#[test]
fn company_number_is_printed_only_when_present() {
    let (_, without) = render_recorded(&sample_context(), &[]);
    assert!(!without.cell_texts().iter().any(|t| t.starts_with("Company No")));

    let mut ctx = sample_context();
    ctx.header.company_registration_number = "201901234567".into();
    let (_, with) = render_recorded(&ctx, &[]);
    let line = find_cell(&with, "Company No : 201901234567").unwrap();
    assert_eq!(line.as_cell().unwrap().font, LayoutConfig::default().company_font);

    // The extra header line pushes the address block down.
    let y = |s: &RecordingSurface| find_cell(s, "Unit 1, Lingkaran Syed Putra").unwrap().bounds().y;
    assert!(y(&with) > y(&without));
}

#[test]
fn bill_to_has_an_underline_across_the_column() {
    let config = LayoutConfig::default();
    let (_, surface) = render_recorded(&sample_context(), &[]);
    let bill_to = find_cell(&surface, "Bill To:").unwrap().bounds();
    let rule = surface
        .instructions()
        .iter()
        .find_map(|i| match i {
            DrawInstruction::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .unwrap();
    assert_eq!(rule.0.x, config.margins.left);
    assert_eq!(rule.1.x, config.margins.left + 95.0);
    assert!((rule.0.y - bill_to.bottom()).abs() < 1e-4);
}

#[test]
fn table_cells_are_filled_and_bordered() {
    let config = LayoutConfig::default();
    let (_, surface) = render_recorded(&sample_context(), &sample_records());
    let instructions = surface.instructions();
    let header_at = instructions
        .iter()
        .position(|i| i.as_cell().is_some_and(|c| c.text == TABLE_HEADERS[0]))
        .unwrap();

    match &instructions[header_at - 1] {
        DrawInstruction::Fill { rect, color } => {
            assert_eq!(*color, config.header_fill);
            assert_eq!(*rect, instructions[header_at].bounds());
        }
        other => panic!("expected a fill before the header cell, got {:?}", other),
    }
    let header = instructions[header_at].as_cell().unwrap();
    assert!(header.border);
    assert_eq!(header.align, CellAlign::Center);

    let description = find_cell(&surface, "Widget").unwrap().as_cell().unwrap();
    assert_eq!(description.align, CellAlign::Left);
    assert_eq!(description.rect.width, 75.0);
    let fills = instructions
        .iter()
        .filter(|i| matches!(i, DrawInstruction::Fill { color, .. } if *color == Color::WHITE))
        .count();
    // Two item rows of five cells plus three totals rows of two cells.
    assert_eq!(fills, 2 * 5 + 3 * 2);
}

#[test]
fn totals_sit_under_the_last_two_columns() {
    let (_, surface) = render_recorded(&sample_context(), &sample_records());
    let price_header = find_cell(&surface, "Unit Price ($)").unwrap().bounds();
    let subtotal = find_cell(&surface, "Subtotal").unwrap().bounds();
    let last_row = find_cell(&surface, "Gadget").unwrap().bounds();
    assert_eq!(subtotal.x, price_header.x);
    assert_eq!(subtotal.y, last_row.bottom());
}

#[test]
fn logo_is_placed_first_when_configured() {
    let mut ctx = sample_context();
    ctx.logo = Some(PathBuf::from("assets/logo.png"));
    let (_, surface) = render_recorded(&ctx, &[]);
    match &surface.instructions()[0] {
        DrawInstruction::Image { rect, path } => {
            assert_eq!(*rect, LayoutConfig::default().logo_rect);
            assert_eq!(path, &PathBuf::from("assets/logo.png"));
        }
        other => panic!("expected the logo first, got {:?}", other),
    }
}

#[test]
fn columns_follow_the_page_width() {
    let mut surface = RecordingSurface::new(Size::new(400.0, 297.0));
    InvoiceLayoutEngine::default()
        .render(&sample_context(), &sample_records(), &mut surface)
        .unwrap();
    // Safe width 380 is twice the A4 safe width.
    let description = find_cell(&surface, "Description").unwrap().bounds();
    assert_eq!(description.width, 150.0);
}

#[test]
fn unwritable_destination_is_reported() {
    let mut surface = UnwritableSurface { drawn: 0 };
    let result =
        InvoiceLayoutEngine::default().render(&sample_context(), &sample_records(), &mut surface);
    assert!(matches!(result, Err(RenderError::Io(_))));
    assert!(surface.drawn > 0);
}
