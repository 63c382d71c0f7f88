//! Terminal shell for the employee roster.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the store for the session.
//! - Run the command loop and close the store on every exit path.

mod command;
mod render;
mod shell;
mod tutorial;

use log::{info, warn};
use roster_core::{init_logging, EmployeeStore, RecordViewController, RosterConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("roster: cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = RosterConfig::from_env(&cwd);

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        // Logging is diagnostic only; the shell still works without it.
        eprintln!("roster: logging disabled: {err}");
    }

    let store = match EmployeeStore::initialize(&config.db_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("roster: {err}");
            return ExitCode::FAILURE;
        }
    };

    let session = match RecordViewController::new(store.repository()) {
        Ok(mut view) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run_shell(&mut view, stdin.lock(), &mut stdout)
                .map_err(|err| err.to_string())
        }
        Err(err) => Err(err.to_string()),
    };

    if let Err(err) = store.close() {
        warn!("event=cli_exit module=cli status=error error={err}");
    }

    match session {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("roster: {message}");
            ExitCode::FAILURE
        }
    }
}
