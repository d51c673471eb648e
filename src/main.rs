//! dockgen CLI entry point
//!
//! Parses arguments, runs the selected command and prints failures with
//! context and suggestions. Any failure exits with status 1.

use clap::Parser;
use dockgen_cli::cli;
use dockgen_cli::core::error::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
