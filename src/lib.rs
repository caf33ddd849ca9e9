//! clerk - customer records with ranked notes and printout history

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command, CustomerCommand, InvoiceTypeCommand, NoteCommand, PrintoutCommand,
    config::Config, handlers::*, logging,
};
use store::SqliteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "clerk",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref());
    let settings = config
        .store_settings()
        .with_context(|| format!("invalid config file: {}", Config::config_path().display()))?;
    let mut store = SqliteStore::open_with(&db_path, settings)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    match &cli.command {
        Command::Customer(cmd) => match cmd {
            CustomerCommand::Add(args) => handle_customer_add(args, &mut store),
            CustomerCommand::List(args) => handle_customer_list(args.format, &store),
            CustomerCommand::Show(args) => handle_customer_show(args, &store),
            CustomerCommand::Edit(args) => handle_customer_edit(args, &mut store),
            CustomerCommand::Remove(args) => handle_customer_remove(args, &mut store),
        },
        Command::Note(cmd) => match cmd {
            NoteCommand::List(args) => handle_note_list(args, &store),
            NoteCommand::Add(args) => handle_note_add(args, &mut store),
            NoteCommand::Update(args) => handle_note_update(args, &mut store),
            NoteCommand::Remove(args) => handle_note_remove(args, &mut store),
        },
        Command::InvoiceType(cmd) => match cmd {
            InvoiceTypeCommand::Add(args) => handle_invoice_type_add(args, &mut store),
            InvoiceTypeCommand::List(args) => handle_invoice_type_list(args.format, &store),
            InvoiceTypeCommand::Rename(args) => handle_invoice_type_rename(args, &mut store),
            InvoiceTypeCommand::Remove(args) => handle_invoice_type_remove(args, &mut store),
        },
        Command::Printout(cmd) => match cmd {
            PrintoutCommand::Add(args) => handle_printout_add(args, &mut store),
            PrintoutCommand::Search(args) => handle_printout_search(args, &store),
            PrintoutCommand::Remove(args) => handle_printout_remove(args, &mut store),
        },
        Command::Completions(_) => Ok(()),
    }
}
