//! Invoice configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line flags. The merged `InvoiceConfig` is turned into the
//! immutable `InvoiceContext` the layout engine consumes.

use crate::error::PipelineError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tally_layout::InvoiceContext;
use tally_types::{InvoiceHeader, PartyInfo, TaxPercent};

pub const DEFAULT_FROM_NAME: &str = "Your Company Inc";
pub const DEFAULT_FROM_ADDRESS: &str = "Unit 1, Lingkaran Syed Putra, Mid Valley City, 59200 Kuala Lumpur, Wilayah Persekutuan Kuala Lumpur";
pub const DEFAULT_FROM_CONTACT: &str = "03-9876 5432";
pub const DEFAULT_TO_NAME: &str = "Target Company Inc";
pub const DEFAULT_TO_ADDRESS: &str = "Unit 999, Lingkaran Syed Putra, Mid Valley City, 59200 Kuala Lumpur, Wilayah Persekutuan Kuala Lumpur";
pub const DEFAULT_TO_CONTACT: &str = "03-1234 5678";
pub const DEFAULT_TAX_PERCENT: u32 = 5;
pub const DEFAULT_OUTPUT: &str = "invoice.pdf";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceConfig {
    pub header: InvoiceHeader,
    pub issuer: PartyInfo,
    pub recipient: PartyInfo,
    /// Validated when the config is turned into a context.
    pub tax_percent: u32,
    pub logo: Option<PathBuf>,
    pub output: PathBuf,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            header: InvoiceHeader {
                invoice_number: String::new(),
                invoice_date: today(),
                company_registration_number: String::new(),
            },
            issuer: PartyInfo::new(DEFAULT_FROM_NAME, DEFAULT_FROM_ADDRESS, DEFAULT_FROM_CONTACT),
            recipient: PartyInfo::new(DEFAULT_TO_NAME, DEFAULT_TO_ADDRESS, DEFAULT_TO_CONTACT),
            tax_percent: DEFAULT_TAX_PERCENT,
            logo: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Today's local date in `YYYY-MM-DD` form.
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// A partial configuration. Every field is optional; set fields replace the
/// corresponding value of the config they are applied to.
///
/// The JSON keys match the long flag names of the command line in camelCase,
/// e.g. `{"invoiceNo": "INV-7", "taxPercent": 6}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub invoice_no: Option<String>,
    pub invoice_date: Option<String>,
    pub company_no: Option<String>,
    pub from_name: Option<String>,
    pub from_address: Option<String>,
    pub from_contact: Option<String>,
    pub to_name: Option<String>,
    pub to_address: Option<String>,
    pub to_contact: Option<String>,
    pub tax_percent: Option<u32>,
    pub logo: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, PipelineError> {
        log::debug!("Loading configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn replace<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl InvoiceConfig {
    /// Defaults, overlaid by the JSON file at `file` if given, overlaid by
    /// `flags`.
    pub fn resolve(file: Option<&Path>, flags: ConfigOverrides) -> Result<Self, PipelineError> {
        let mut config = Self::default();
        if let Some(path) = file {
            config.apply(ConfigOverrides::from_file(path)?);
        }
        config.apply(flags);
        Ok(config)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        replace(&mut self.header.invoice_number, overrides.invoice_no);
        replace(&mut self.header.invoice_date, overrides.invoice_date);
        replace(&mut self.header.company_registration_number, overrides.company_no);
        replace(&mut self.issuer.name, overrides.from_name);
        replace(&mut self.issuer.address, overrides.from_address);
        replace(&mut self.issuer.contact, overrides.from_contact);
        replace(&mut self.recipient.name, overrides.to_name);
        replace(&mut self.recipient.address, overrides.to_address);
        replace(&mut self.recipient.contact, overrides.to_contact);
        replace(&mut self.tax_percent, overrides.tax_percent);
        if overrides.logo.is_some() {
            self.logo = overrides.logo;
        }
        replace(&mut self.output, overrides.output);
    }

    /// Validates the config and builds the engine's view of it.
    pub fn to_context(&self) -> Result<InvoiceContext, PipelineError> {
        let tax_percent = TaxPercent::new(self.tax_percent)?;
        if let Some(logo) = self.logo.as_ref().filter(|path| !path.is_file()) {
            return Err(PipelineError::Config(format!(
                "logo image {} does not exist",
                logo.display()
            )));
        }
        Ok(InvoiceContext {
            header: self.header.clone(),
            issuer: self.issuer.clone(),
            recipient: self.recipient.clone(),
            tax_percent,
            logo: self.logo.clone(),
        })
    }
}
