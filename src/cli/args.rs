use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "fasi7")]
#[command(about = "Localization files translation tool using AI")]
#[command(version)]
pub struct Args {
    /// Config file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Maximum number of translation requests in flight (overrides the config file)
    #[arg(short = 'c', long)]
    pub concurrency: Option<NonZeroUsize>,

    /// Keep translating after a failure and report every failure at the end
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a config file template
    Init {
        /// Overwrite an existing config file
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Print the version number
    Version,
    /// List known language codes
    Languages,
}
