//! helm-image-updater CLI - update image repository/tag in Helm values files
//!
//! Usage: helm-image-updater <COMMAND>
//!
//! Commands:
//!   image       Update image version and/or repository in a values.yaml file
//!   tag         Update image tag in a values.yaml file
//!   repository  Update image repository in a values.yaml file
//!   chart       Update appVersion in a Chart.yaml file

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod presentation;
mod ui;

use presentation::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match commands::cmd_update(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let color = ui::terminal::detect_capabilities().color_stderr(cli.color);
            ui::error::print_error(&err, cli.json, color);
            ExitCode::FAILURE
        }
    }
}
