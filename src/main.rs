use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tally::records::{read_records_from_path, validate_input_path};
use tally::{ConfigOverrides, InvoiceConfig, PipelineBuilder, PipelineError};
use tally_layout::ledger::format_money;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Generates invoices on the fly")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an invoice from a CSV file containing the items for the invoice
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// CSV file of `quantity,description,unit price` rows, without a header
    csv: PathBuf,

    /// Invoice number [default: empty]
    #[arg(short = 'n', long = "invoice-no", alias = "invoiceNo")]
    invoice_no: Option<String>,

    /// Invoice date as YYYY-MM-DD [default: today]
    #[arg(short = 'd', long = "invoice-date", alias = "invoiceDate")]
    invoice_date: Option<String>,

    /// Company registration number [default: empty]
    #[arg(short = 'p', long = "company-no", alias = "companyNo")]
    company_no: Option<String>,

    #[arg(short = 'f', long = "from-name", alias = "fromName")]
    from_name: Option<String>,

    #[arg(short = 'a', long = "from-address", alias = "fromAddress")]
    from_address: Option<String>,

    #[arg(short = 'c', long = "from-contact", alias = "fromContact")]
    from_contact: Option<String>,

    #[arg(short = 'o', long = "to-name", alias = "toName")]
    to_name: Option<String>,

    #[arg(short = 'r', long = "to-address", alias = "toAddress")]
    to_address: Option<String>,

    #[arg(short = 't', long = "to-contact", alias = "toContact")]
    to_contact: Option<String>,

    /// Tax percentage, 0 to 100 [default: 5]
    #[arg(
        short = 'e',
        long = "tax-percent",
        alias = "taxPercent",
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    tax_percent: Option<u32>,

    /// JSON file with default values for any of the options above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the PDF [default: invoice.pdf]
    #[arg(long)]
    output: Option<PathBuf>,

    /// PNG or JPEG image placed in the top-left corner
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Print the draw instructions as JSON instead of writing a PDF
    #[arg(long)]
    dump: bool,
}

impl GenerateArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            invoice_no: self.invoice_no.clone(),
            invoice_date: self.invoice_date.clone(),
            company_no: self.company_no.clone(),
            from_name: self.from_name.clone(),
            from_address: self.from_address.clone(),
            from_contact: self.from_contact.clone(),
            to_name: self.to_name.clone(),
            to_address: self.to_address.clone(),
            to_contact: self.to_contact.clone(),
            tax_percent: self.tax_percent,
            logo: self.logo.clone(),
            output: self.output.clone(),
        }
    }
}

fn generate(args: GenerateArgs) -> Result<(), PipelineError> {
    let input = validate_input_path(&args.csv)?;
    let records = read_records_from_path(&input)?;

    let config = InvoiceConfig::resolve(args.config.as_deref(), args.overrides())?;
    let pipeline = PipelineBuilder::new().with_config(config).build()?;

    if args.dump {
        let instructions = pipeline.dump_instructions(&records)?;
        println!("{}", serde_json::to_string_pretty(&instructions)?);
        return Ok(());
    }

    let output = pipeline.output_path();
    let totals = pipeline.generate_to_file(&records, output)?;
    println!(
        "Successfully generated {} (grand total {})",
        output.display(),
        format_money(totals.grand_total)
    );
    Ok(())
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate(args),
    }
}
