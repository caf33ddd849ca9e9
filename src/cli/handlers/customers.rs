//! Customer command handlers.

use anyhow::{Context, Result};

use super::{invalid, or_dash};
use crate::cli::output::{Output, OutputFormat, truncate_str};
use crate::cli::{CustomerAddArgs, CustomerEditArgs, CustomerRemoveArgs, CustomerShowArgs};
use crate::domain::{Customer, CustomerInput};
use crate::store::{CustomerRepository, StoreError};

fn print_customer(customer: &Customer, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("ID:       {}", customer.id);
            println!("Name:     {}", customer.name);
            println!("Address:  {}", or_dash(customer.address.as_deref()));
            println!("Phone:    {}", or_dash(customer.phone.as_deref()));
            println!("Notes:    {}", customer.notes);
            println!(
                "Created:  {}",
                customer.created_at.format("%Y-%m-%d %H:%M")
            );
        }
        OutputFormat::Json => Output::new(customer).print()?,
    }
    Ok(())
}

pub fn handle_customer_add(
    args: &CustomerAddArgs,
    store: &mut impl CustomerRepository,
) -> Result<()> {
    let input = CustomerInput::new(&args.name, args.address.as_deref(), args.phone.as_deref())
        .map_err(invalid)?;
    let customer = store
        .create_customer(&input)
        .context("failed to create customer")?;
    print_customer(&customer, args.format)
}

pub fn handle_customer_list(format: OutputFormat, store: &impl CustomerRepository) -> Result<()> {
    let customers = store.list_customers().context("failed to list customers")?;

    match format {
        OutputFormat::Human => {
            if customers.is_empty() {
                println!("No customers found.");
                return Ok(());
            }
            println!("{:>6}  {:<30}  {:<16}  {:>5}", "ID", "Name", "Phone", "Notes");
            println!(
                "{:>6}  {:<30}  {:<16}  {:>5}",
                "------",
                "------------------------------",
                "----------------",
                "-----"
            );
            for c in &customers {
                println!(
                    "{:>6}  {:<30}  {:<16}  {:>5}",
                    c.id,
                    truncate_str(&c.name, 30),
                    or_dash(c.phone.as_deref()),
                    c.notes
                );
            }
            println!();
            println!("{} customer(s)", customers.len());
        }
        OutputFormat::Json => Output::new(&customers).print()?,
    }
    Ok(())
}

pub fn handle_customer_show(
    args: &CustomerShowArgs,
    store: &impl CustomerRepository,
) -> Result<()> {
    let customer = store
        .get_customer(args.id)
        .context("failed to load customer")?
        .ok_or_else(|| StoreError::customer_not_found(args.id))?;
    print_customer(&customer, args.format)
}

pub fn handle_customer_edit(
    args: &CustomerEditArgs,
    store: &mut impl CustomerRepository,
) -> Result<()> {
    let current = store
        .get_customer(args.id)
        .context("failed to load customer")?
        .ok_or_else(|| StoreError::customer_not_found(args.id))?;

    let name = args.name.as_deref().unwrap_or(&current.name);
    let address = args.address.as_deref().or(current.address.as_deref());
    let phone = args.phone.as_deref().or(current.phone.as_deref());
    let input = CustomerInput::new(name, address, phone).map_err(invalid)?;

    let customer = store
        .update_customer(args.id, &input)
        .with_context(|| format!("failed to update customer {}", args.id))?;
    print_customer(&customer, args.format)
}

pub fn handle_customer_remove(
    args: &CustomerRemoveArgs,
    store: &mut impl CustomerRepository,
) -> Result<()> {
    let removed = store
        .delete_customer(args.id)
        .with_context(|| format!("failed to delete customer {}", args.id))?;
    if removed == 0 {
        return Err(StoreError::customer_not_found(args.id).into());
    }
    println!("Deleted customer {}", args.id);
    Ok(())
}
