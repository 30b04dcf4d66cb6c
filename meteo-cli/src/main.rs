//! Binary crate for the `meteo` command-line tool.
//!
//! This crate focuses on:
//! - Reading the JSON payload (argument or stdin)
//! - Mapping the pipeline result to one line of JSON plus an exit code

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries nothing but the result JSON.
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::init_from_env(env);

    let cmd = cli::Cli::parse();
    cmd.run().await
}
