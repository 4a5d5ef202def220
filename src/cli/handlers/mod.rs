use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::catalog::load_catalog;
use crate::io::config_io::Settings;
use crate::io::store::Store;
use crate::util::unicode::display_width;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        None => crate::tui::run(settings),
        Some(Commands::List) => cmd_list(settings, json),
        Some(Commands::Checkpoints(args)) => cmd_checkpoints(args, settings, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(settings: &Settings, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(&settings.root)?;
    let workspaces = catalog.workspaces();

    if json {
        let results: Vec<WorkspaceJson> = workspaces
            .iter()
            .enumerate()
            .map(|(i, ws)| workspace_to_json(i + 1, ws))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        let name_width = workspaces
            .iter()
            .map(|ws| display_width(&ws.name))
            .max()
            .unwrap_or(0);
        for (i, ws) in workspaces.iter().enumerate() {
            println!("{}", format_workspace_line(i + 1, ws, name_width));
        }
    }
    Ok(())
}

fn cmd_checkpoints(
    args: CheckpointsArgs,
    settings: &Settings,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // A store that was never written holds no checkpoints.
    let checkpoints = match Store::open_read_only(&settings.store)? {
        Some(store) => {
            let checkpoints = store.checkpoints_for(&args.name)?;
            store.close()?;
            checkpoints
        }
        None => Vec::new(),
    };

    if json {
        let results: Vec<CheckpointJson> = checkpoints
            .iter()
            .map(|cp| checkpoint_to_json(&args.name, cp))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (i, cp) in checkpoints.iter().enumerate() {
            if i > 0 {
                println!();
            }
            for line in format_checkpoint(cp) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
