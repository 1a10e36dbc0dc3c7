//! jlink_bundler - minimized runtime images for JVM desktop applications.
//!
//! This binary wraps the library CLI: parse arguments, run the selected
//! subcommand, and report errors with their full cause chain.

use std::error::Error as _;
use std::process;

use jlink_bundler::cli;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
