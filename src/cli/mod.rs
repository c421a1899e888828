//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::config::ConfigError;
use crate::fs::WriteError;
use crate::translation::{TaskError, TranslateError};

/// Exit status used for configuration problems and any failure without a more specific code.
pub const EXIT_FAILURE: i32 = 1;

/// Maps an error to the process exit status.
///
/// Configuration errors exit with 1. Filesystem and API failures use the
/// matching `sysexits` codes.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return EXIT_FAILURE;
    }

    let task_error = err.downcast_ref::<TaskError>().or_else(|| {
        err.downcast_ref::<TranslateError>().and_then(|e| match e {
            TranslateError::Task(task) => Some(task),
            TranslateError::Read { .. } => None,
        })
    });

    match task_error {
        Some(TaskError::Request { .. }) => exitcode::UNAVAILABLE,
        Some(TaskError::Write(_)) => exitcode::IOERR,
        Some(TaskError::Aborted(_)) => exitcode::SOFTWARE,
        None if err.downcast_ref::<TranslateError>().is_some()
            || err.downcast_ref::<WriteError>().is_some() =>
        {
            exitcode::IOERR
        }
        None => EXIT_FAILURE,
    }
}

/// Whether the error should be printed to stdout instead of stderr.
pub fn is_config_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ConfigError>().is_some()
}
