//! Loadstone - command-line tool for wiki image locators and boss progression

use std::process::ExitCode;

use loadstone::cli;

fn main() -> ExitCode {
    cli::run()
}
