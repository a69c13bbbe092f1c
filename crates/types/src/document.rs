//! The invoice data model consumed by the layout engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The issuer or the recipient of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub name: String,
    /// Free-form, comma-delimited postal address.
    pub address: String,
    pub contact: String,
}

impl PartyInfo {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact: contact.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceHeader {
    pub invoice_number: String,
    pub invoice_date: String,
    /// Printed under the issuer name only when non-empty.
    pub company_registration_number: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tax percent must be between 0 and 100, got {0}")]
pub struct TaxPercentError(pub u32);

/// A whole-number tax rate in the range `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TaxPercent(u8);

impl TaxPercent {
    pub fn new(percent: u32) -> Result<Self, TaxPercentError> {
        if percent > 100 {
            return Err(TaxPercentError(percent));
        }
        Ok(Self(percent as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for TaxPercent {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for TaxPercent {
    type Error = TaxPercentError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaxPercent> for u32 {
    fn from(value: TaxPercent) -> Self {
        value.0 as u32
    }
}

/// A billable row as parsed from a raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub quantity: i64,
    pub description: String,
    pub unit_price: Decimal,
}

/// A line item with its derived amounts and its position in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedLine {
    /// 1-based; counts emitted rows only.
    pub sequence: usize,
    pub item: LineItem,
    pub unit_price_rounded: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}
