use clap::Parser;
use workspaces::cli::commands::Cli;
use workspaces::cli::handlers;
use workspaces::io::config_io::{self, Settings};
use workspaces::io::log::init_logging;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.config.clone().or_else(config_io::default_config_path) {
        Some(path) => config_io::read_config(&path)?,
        None => Default::default(),
    };
    let settings = Settings::resolve(cli.overrides(), config)?;

    // Only the browser logs; subcommands leave the workspace root untouched.
    if cli.command.is_none() {
        init_logging(&settings.log_file)?;
    }

    let result = handlers::dispatch(cli, &settings);
    if let Err(ref e) = result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}
