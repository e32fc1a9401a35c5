use std::io::Write;

use anyhow::Result;
use log::debug;

use helm_image_updater::UpdateOptions;

use crate::presentation::cli::Cli;
use crate::presentation::create_update_use_case;
use crate::presentation::output::{renderer_for, OutputFormat};
use crate::ui::terminal::detect_capabilities;

pub fn cmd_update(cli: &Cli) -> Result<()> {
    let file = cli.command.file();
    let request = cli.command.to_request();
    let options = UpdateOptions::new().with_dry_run(cli.dry_run);
    debug!("{:?} on {}", request, file.display());

    let use_case = create_update_use_case();
    let outcome = use_case.execute(file, &request, &options)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let color = detect_capabilities().color_stdout(cli.color);
    let renderer = renderer_for(format, color, cli.quiet);

    let mut out = std::io::stdout().lock();
    renderer.render(&outcome, &mut out)?;
    out.flush()?;

    Ok(())
}
