use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use mkenv::cli::{self, Cli};
use mkenv::LogReporter;

fn main() -> ExitCode {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();

    let res = cli::run(&args, LogReporter).with_context(|| {
        if args.reverse {
            "reverse conversion failed"
        } else {
            "image creation failed"
        }
    });

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mkenv: Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
