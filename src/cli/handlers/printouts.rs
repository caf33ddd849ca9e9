//! Printout history command handlers.

use anyhow::{Context, Result};

use super::invalid;
use crate::cli::output::{Output, OutputFormat, truncate_str};
use crate::cli::{PrintoutAddArgs, PrintoutRemoveArgs, PrintoutSearchArgs};
use crate::domain::{
    PrintoutDraft, PrintoutInput, PrintoutKey, SearchCategory, parse_date, parse_timestamp,
};
use crate::store::{PrintoutRepository, StoreError};

impl From<&PrintoutAddArgs> for PrintoutDraft {
    fn from(args: &PrintoutAddArgs) -> Self {
        PrintoutDraft {
            delivery_date: args.delivery_date.clone(),
            delivery_time: args.delivery_time.clone(),
            printed_at: args.printed_at.clone(),
            page_num: args.page.clone(),
            customer_name: args.customer_name.clone(),
            customer_address: args.customer_address.clone(),
            wholesaler: args.wholesaler.clone(),
            order_number: args.order_number.clone(),
            shipping_date: args.shipping_date.clone(),
            carrier: args.carrier.clone(),
            package_count: args.packages,
            items_of_order: args.items.clone(),
        }
    }
}

pub fn handle_printout_add(
    args: &PrintoutAddArgs,
    store: &mut impl PrintoutRepository,
) -> Result<()> {
    let input = PrintoutInput::parse(PrintoutDraft::from(args)).map_err(invalid)?;
    let key = store
        .record_printout(&input)
        .context("failed to record printout")?;
    println!(
        "Recorded printout for {} printed at {}",
        key.delivery_date,
        key.printed_at.to_rfc3339()
    );
    Ok(())
}

pub fn handle_printout_search(
    args: &PrintoutSearchArgs,
    store: &impl PrintoutRepository,
) -> Result<()> {
    let category = SearchCategory::from(args.category);
    let printouts = store
        .search_printouts(category, args.from, args.to)
        .with_context(|| format!("failed to search printouts by {}", category.column()))?;

    match args.format {
        OutputFormat::Human => {
            if printouts.is_empty() {
                println!("No printouts found.");
                return Ok(());
            }
            println!(
                "{:<10}  {:<25}  {:<10}  {:<24}  {:>4}",
                "Delivery", "Printed", "Shipping", "Customer", "Pkgs"
            );
            println!(
                "{:<10}  {:<25}  {:<10}  {:<24}  {:>4}",
                "----------",
                "-------------------------",
                "----------",
                "------------------------",
                "----"
            );
            for p in &printouts {
                let packages = p
                    .package_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<10}  {:<25}  {:<10}  {:<24}  {:>4}",
                    p.delivery_date,
                    p.printed_at.to_rfc3339(),
                    p.shipping_date,
                    truncate_str(&p.customer_name, 24),
                    packages
                );
            }
            println!();
            println!("{} printout(s)", printouts.len());
        }
        OutputFormat::Json => Output::new(&printouts).print()?,
    }
    Ok(())
}

pub fn handle_printout_remove(
    args: &PrintoutRemoveArgs,
    store: &mut impl PrintoutRepository,
) -> Result<()> {
    let key = PrintoutKey {
        delivery_date: parse_date("delivery date", &args.delivery_date).map_err(invalid)?,
        printed_at: parse_timestamp(&args.printed_at).map_err(invalid)?,
    };
    let removed = store
        .delete_printout(&key)
        .context("failed to delete printout")?;
    if removed == 0 {
        return Err(StoreError::NotFound {
            what: format!(
                "printout for {} printed at {}",
                key.delivery_date,
                key.printed_at.to_rfc3339()
            ),
        }
        .into());
    }
    println!("Deleted printout for {}", key.delivery_date);
    Ok(())
}
