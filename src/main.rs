use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fasi7::cli::commands::{init, translate, version};
use fasi7::cli::{Args, Command, exit_code, is_config_error};
use fasi7::translation::print_languages;
use fasi7::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.verbose) {
        eprintln!("{} {err:#}", Style::error("Error:"));
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if is_config_error(&err) {
                println!("{err:#}");
            } else {
                eprintln!("{} {err:#}", Style::error("Error:"));
            }
            ExitCode::from(u8::try_from(exit_code(&err)).unwrap_or(1))
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Init { force }) => init::run_init(&args.config, force),
        Some(Command::Version) => {
            version::print_version();
            Ok(())
        }
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        None => {
            let options = translate::TranslateOptions {
                config_path: args.config,
                concurrency: args.concurrency,
                keep_going: args.keep_going,
                show_progress: !args.verbose,
            };
            translate::run_translate(options).await
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let directive = if verbose { "fasi7=debug" } else { "fasi7=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
