//! Invoice type command handlers.

use anyhow::{Context, Result};

use super::invalid;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{InvoiceTypeAddArgs, InvoiceTypeRemoveArgs, InvoiceTypeRenameArgs};
use crate::domain::InvoiceTypeName;
use crate::store::{InvoiceTypeRepository, StoreError};

pub fn handle_invoice_type_add(
    args: &InvoiceTypeAddArgs,
    store: &mut impl InvoiceTypeRepository,
) -> Result<()> {
    let name = InvoiceTypeName::new(&args.name).map_err(invalid)?;
    let created = store
        .create_invoice_type(&name)
        .with_context(|| format!("failed to create invoice type '{}'", name))?;
    println!("Created invoice type {} '{}'", created.id, created.name);
    Ok(())
}

pub fn handle_invoice_type_list(
    format: OutputFormat,
    store: &impl InvoiceTypeRepository,
) -> Result<()> {
    let types = store
        .list_invoice_types()
        .context("failed to list invoice types")?;

    match format {
        OutputFormat::Human => {
            if types.is_empty() {
                println!("No invoice types found.");
            } else {
                for t in &types {
                    println!("{:>4}  {}", t.id, t.name);
                }
            }
        }
        OutputFormat::Json => Output::new(&types).print()?,
    }
    Ok(())
}

pub fn handle_invoice_type_rename(
    args: &InvoiceTypeRenameArgs,
    store: &mut impl InvoiceTypeRepository,
) -> Result<()> {
    let name = InvoiceTypeName::new(&args.name).map_err(invalid)?;
    let renamed = store
        .rename_invoice_type(args.id, &name)
        .with_context(|| format!("failed to rename invoice type {}", args.id))?;
    println!("Renamed invoice type {} to '{}'", renamed.id, renamed.name);
    Ok(())
}

pub fn handle_invoice_type_remove(
    args: &InvoiceTypeRemoveArgs,
    store: &mut impl InvoiceTypeRepository,
) -> Result<()> {
    let removed = store
        .delete_invoice_type(args.id)
        .with_context(|| format!("failed to delete invoice type {}", args.id))?;
    if removed == 0 {
        return Err(StoreError::NotFound {
            what: format!("invoice type {}", args.id),
        }
        .into());
    }
    println!("Deleted invoice type {}", args.id);
    Ok(())
}
