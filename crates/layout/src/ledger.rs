//! Line-item parsing and invoice arithmetic.
//!
//! All amounts are exact decimals. Rounding is half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tally_types::{ComputedLine, InvoiceTotals, LineItem, TaxPercent};

/// Number of fields a raw record must have to be a line item.
pub const RECORD_FIELDS: usize = 3;

/// Parses a raw `(quantity, description, unit price)` record.
///
/// Records with any other number of fields yield `None`. Numeric fields that
/// do not parse fall back to zero.
pub fn parse_record<F: AsRef<str>>(fields: &[F]) -> Option<LineItem> {
    if fields.len() != RECORD_FIELDS {
        log::debug!("Skipping record with {} fields", fields.len());
        return None;
    }
    Some(LineItem {
        quantity: parse_quantity(fields[0].as_ref()),
        description: fields[1].as_ref().to_string(),
        unit_price: parse_unit_price(fields[2].as_ref()),
    })
}

pub fn parse_quantity(raw: &str) -> i64 {
    raw.parse::<i64>().unwrap_or_else(|e| {
        log::warn!("Quantity {:?} is not an integer ({}), using 0", raw, e);
        0
    })
}

/// Plain or scientific decimal notation. Digit-group underscores are not
/// accepted, matching integer quantity parsing.
pub fn parse_unit_price(raw: &str) -> Decimal {
    let parsed = if raw.contains('_') {
        Err("digit separators are not allowed".to_string())
    } else {
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|e| e.to_string())
    };
    parsed.unwrap_or_else(|e| {
        log::warn!("Unit price {:?} is not a number ({}), using 0", raw, e);
        Decimal::ZERO
    })
}

/// Rounds to cents.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `round(subtotal × percent) / 100`: the product is rounded to a whole unit
/// before it is scaled back down.
pub fn tax_amount(subtotal: Decimal, percent: TaxPercent) -> Decimal {
    let scaled = subtotal.saturating_mul(Decimal::from(percent.get()));
    scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) / Decimal::ONE_HUNDRED
}

pub fn compute_line(sequence: usize, item: LineItem) -> ComputedLine {
    let unit_price_rounded = round_money(item.unit_price);
    let line_total = Decimal::from(item.quantity).saturating_mul(unit_price_rounded);
    ComputedLine {
        sequence,
        item,
        unit_price_rounded,
        line_total,
    }
}

/// Formats an amount with exactly two decimal places.
pub fn format_money(value: Decimal) -> String {
    if value.is_zero() {
        return "0.00".to_string();
    }
    format!("{:.2}", value)
}

/// Accumulates computed lines in input order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    lines: Vec<ComputedLine>,
    subtotal: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from raw records, skipping malformed ones.
    pub fn from_records<I, R, F>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut ledger = Self::new();
        for record in records {
            ledger.push_record(record.as_ref());
        }
        ledger
    }

    /// Adds a raw record. Returns the computed line when the record was
    /// accepted.
    pub fn push_record<F: AsRef<str>>(&mut self, fields: &[F]) -> Option<&ComputedLine> {
        let item = parse_record(fields)?;
        let line = compute_line(self.lines.len() + 1, item);
        self.subtotal = self.subtotal.saturating_add(line.line_total);
        self.lines.push(line);
        self.lines.last()
    }

    pub fn lines(&self) -> &[ComputedLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn totals(&self, percent: TaxPercent) -> InvoiceTotals {
        let tax_amount = tax_amount(self.subtotal, percent);
        InvoiceTotals {
            subtotal: self.subtotal,
            tax_amount,
            grand_total: self.subtotal.saturating_add(tax_amount),
        }
    }
}
