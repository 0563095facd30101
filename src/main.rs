//! Todo CLI - a todo list backed by a SQLite table.

use clap::{CommandFactory, Parser};
use std::process;
use taskboard::cli::{Cli, Commands};
use taskboard::commands::{self, Output};
use taskboard::logging;
use taskboard::storage::TodoStore;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let json = cli.json;
    let store = TodoStore::new(&cli.db_path);

    if let Err(e) = run_command(cli.command, &store, json) {
        tracing::debug!(error = ?e, "command failed");
        if json {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn run_command(
    command: Option<Commands>,
    store: &TodoStore,
    json: bool,
) -> Result<(), taskboard::Error> {
    // The table is created on first use, whatever the command
    store.init()?;

    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    tracing::debug!(command = command.name(), db = %store.path().display(), "running");

    match command {
        Commands::Add { task } => output(&commands::add(store, &task)?, json),
        Commands::List => output(&commands::list(store)?, json),
        Commands::Delete { id } => output(&commands::delete(store, id)?, json),
        Commands::Update { id, task } => output(&commands::update(store, id, &task)?, json),
        Commands::Complete { id } => output(&commands::mark_complete(store, id, true)?, json),
        Commands::Incomplete { id } => output(&commands::mark_complete(store, id, false)?, json),
    }

    Ok(())
}

fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}
