//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{CustomerId, InvoiceTypeId, Rank, SearchCategory};
use output::OutputFormat;

/// clerk - customer records with ranked notes and printout history
#[derive(Parser, Debug)]
#[command(name = "clerk", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Manage a customer's ranked notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Manage invoice types
    #[command(subcommand, name = "invoice-type")]
    InvoiceType(InvoiceTypeCommand),

    /// Record and search shipping-instruction printouts
    #[command(subcommand)]
    Printout(PrintoutCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ===========================================
// customer
// ===========================================

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    /// Create a customer
    Add(CustomerAddArgs),

    /// List all customers
    #[command(name = "ls")]
    List(FormatArgs),

    /// Show one customer
    Show(CustomerShowArgs),

    /// Change a customer's contact fields
    Edit(CustomerEditArgs),

    /// Delete a customer and all their notes
    #[command(name = "rm")]
    Remove(CustomerRemoveArgs),
}

/// Arguments shared by commands that only choose an output format
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `customer add`
#[derive(Parser, Debug)]
pub struct CustomerAddArgs {
    /// Customer name
    pub name: String,

    /// Postal address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `customer show`
#[derive(Parser, Debug)]
pub struct CustomerShowArgs {
    /// Customer id
    pub id: CustomerId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `customer edit`
///
/// Fields not given keep their current value. An empty string clears an
/// optional field.
#[derive(Parser, Debug)]
pub struct CustomerEditArgs {
    /// Customer id
    pub id: CustomerId,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New postal address
    #[arg(short, long)]
    pub address: Option<String>,

    /// New phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `customer rm`
#[derive(Parser, Debug)]
pub struct CustomerRemoveArgs {
    /// Customer id
    pub id: CustomerId,
}

// ===========================================
// note
// ===========================================

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// List a customer's notes in display order
    #[command(name = "ls")]
    List(NoteListArgs),

    /// Add a note at a rank, pushing later notes down
    Add(NoteAddArgs),

    /// Change a note's content and/or move it to another rank
    Update(NoteUpdateArgs),

    /// Delete the note at a rank
    #[command(name = "rm")]
    Remove(NoteRemoveArgs),
}

/// Arguments for `note ls`
#[derive(Parser, Debug)]
pub struct NoteListArgs {
    /// Customer id
    pub customer: CustomerId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `note add`
#[derive(Parser, Debug)]
pub struct NoteAddArgs {
    /// Customer id
    pub customer: CustomerId,

    /// Note content
    pub content: String,

    /// Rank to insert at (default: end of list)
    #[arg(short, long)]
    pub rank: Option<Rank>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `note update`
#[derive(Parser, Debug)]
pub struct NoteUpdateArgs {
    /// Customer id
    pub customer: CustomerId,

    /// Current rank of the note
    pub rank: Rank,

    /// Rank to move the note to (default: stay)
    #[arg(long)]
    pub to: Option<Rank>,

    /// Replacement content (default: keep)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `note rm`
#[derive(Parser, Debug)]
pub struct NoteRemoveArgs {
    /// Customer id
    pub customer: CustomerId,

    /// Rank of the note to delete
    pub rank: Rank,
}

// ===========================================
// invoice-type
// ===========================================

#[derive(Subcommand, Debug)]
pub enum InvoiceTypeCommand {
    /// Create an invoice type
    Add(InvoiceTypeAddArgs),

    /// List invoice types
    #[command(name = "ls")]
    List(FormatArgs),

    /// Rename an invoice type
    Rename(InvoiceTypeRenameArgs),

    /// Delete an invoice type
    #[command(name = "rm")]
    Remove(InvoiceTypeRemoveArgs),
}

/// Arguments for `invoice-type add`
#[derive(Parser, Debug)]
pub struct InvoiceTypeAddArgs {
    /// Invoice type name
    pub name: String,
}

/// Arguments for `invoice-type rename`
#[derive(Parser, Debug)]
pub struct InvoiceTypeRenameArgs {
    /// Invoice type id
    pub id: InvoiceTypeId,

    /// New name
    pub name: String,
}

/// Arguments for `invoice-type rm`
#[derive(Parser, Debug)]
pub struct InvoiceTypeRemoveArgs {
    /// Invoice type id
    pub id: InvoiceTypeId,
}

// ===========================================
// printout
// ===========================================

#[derive(Subcommand, Debug)]
pub enum PrintoutCommand {
    /// Record a printed shipping instruction
    Add(PrintoutAddArgs),

    /// Search printout history by date
    Search(PrintoutSearchArgs),

    /// Delete one printout record
    #[command(name = "rm")]
    Remove(PrintoutRemoveArgs),
}

/// Arguments for `printout add`
#[derive(Parser, Debug)]
pub struct PrintoutAddArgs {
    /// Delivery date (YYYY-MM-DD)
    #[arg(long)]
    pub delivery_date: String,

    /// Delivery time slot
    #[arg(long, default_value = "")]
    pub delivery_time: String,

    /// When it was printed (RFC 3339, default: now)
    #[arg(long)]
    pub printed_at: Option<String>,

    /// Page number text, e.g. "1/2"
    #[arg(long, default_value = "")]
    pub page: String,

    /// Recipient name
    #[arg(long)]
    pub customer_name: String,

    /// Recipient address
    #[arg(long)]
    pub customer_address: String,

    /// Wholesaler
    #[arg(long, default_value = "")]
    pub wholesaler: String,

    /// Order number
    #[arg(long, default_value = "")]
    pub order_number: String,

    /// Shipping date (YYYY-MM-DD, default: day printed)
    #[arg(long, default_value = "")]
    pub shipping_date: String,

    /// Carrier
    #[arg(long, default_value = "")]
    pub carrier: String,

    /// Number of packages (0 means unknown)
    #[arg(long, default_value_t = 0)]
    pub packages: u32,

    /// Items in the order
    #[arg(long)]
    pub items: String,
}

/// Column a printout search filters on
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    DeliveryDate,
    ShippingDate,
    PrintedAt,
}

impl From<CategoryArg> for SearchCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::DeliveryDate => SearchCategory::DeliveryDate,
            CategoryArg::ShippingDate => SearchCategory::ShippingDate,
            CategoryArg::PrintedAt => SearchCategory::PrintedAt,
        }
    }
}

/// Arguments for `printout search`
#[derive(Parser, Debug)]
pub struct PrintoutSearchArgs {
    /// Date column to search
    #[arg(long = "by", value_enum, default_value_t = CategoryArg::DeliveryDate)]
    pub category: CategoryArg,

    /// One end of the range (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Other end of the range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `printout rm`
#[derive(Parser, Debug)]
pub struct PrintoutRemoveArgs {
    /// Delivery date (YYYY-MM-DD)
    #[arg(long)]
    pub delivery_date: String,

    /// Printed-at timestamp exactly as listed (RFC 3339)
    #[arg(long)]
    pub printed_at: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
