//! Subcommand implementations.

/// Init command handler.
pub mod init;

/// Translation run handler.
pub mod translate;

/// Version command handler.
pub mod version;
