//! # vtune-report - Main Entry Point
//!
//! Supports two operational modes:
//! - **Single** (`--dir <DIR>`): analyze one VTune result directory
//! - **Batch** (`--all <DIR>`): analyze every result directory under a base directory

use anyhow::Result;
use clap::{CommandFactory, Parser};
use vtune_report::batch::{process_result_dir, run_batch};
use vtune_report::cli::Args;
use vtune_report::domain::CliError;
use vtune_report::preflight::check_result_dir;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::MissingTarget) => EXIT_USAGE,
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = args.run_options();

    if let Some(ref dir) = args.dir {
        check_result_dir(dir)?;
        let path = process_result_dir(dir, args.output.as_deref(), &options)?;
        if !options.quiet {
            println!("saved: {}", path.display());
        }
        return Ok(());
    }

    if let Some(ref base_dir) = args.all {
        check_result_dir(base_dir)?;
        let summary = run_batch(base_dir, &options)?;
        if !options.quiet {
            println!(
                "\ndone: {} written, {} failed",
                summary.written.len(),
                summary.failed.len()
            );
        }
        return Ok(());
    }

    // Neither mode selected - show usage
    Args::command().print_help()?;
    println!();
    Err(CliError::MissingTarget.into())
}
