//! Error handling and display for the CLI.

use arm_resource_manager::RegistryError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("Invalid field assignment {0:?}, expected key=value")]
    InvalidAssignment(String),

    #[error("{failed} of {total} resource IDs failed validation")]
    ValidationFailed { failed: usize, total: usize },

    #[error("No resource IDs given")]
    NoInput,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::UnknownKind(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `armid kinds` to list the registered kinds.".yellow()
                );
            }
            CliError::Registry(RegistryError::MissingValue { .. })
            | CliError::Registry(RegistryError::UnknownField { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `armid segments <KIND>` to see the expected fields.".yellow()
                );
            }
            CliError::Registry(RegistryError::Parse(e)) if e.is_mismatch() => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --insensitive for IDs returned by the API.".yellow()
                );
            }
            CliError::NoInput => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass IDs as arguments or use --file.".yellow()
                );
            }
            _ => {}
        }
    }
}
