//! Groundwork CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use groundwork::cli::{Cli, CreateCommand};
use groundwork::scaffold::{ProjectRequest, TemplateSource};
use groundwork::shell::is_ci;
use groundwork::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("groundwork=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("groundwork=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Groundwork starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    // Exactly one of the positional argument or --name must carry the name.
    let name = match cli.project_name() {
        Some(name) => name,
        None => {
            ui.error("Missing project name. Usage: groundwork <NAME> (or --name <NAME>)");
            return ExitCode::from(2);
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            ui.error(&format!("Cannot determine working directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let request = match ProjectRequest::new(&name, &cwd) {
        Ok(request) => request,
        Err(e) => {
            ui.error(&format!("{}", e));
            return ExitCode::from(2);
        }
    };

    let command = CreateCommand::new(request, TemplateSource::from_env());

    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
