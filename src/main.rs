//! profed - terminal account profile editor
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use profile_app::config::load_settings_from;
use profile_app::Location;
use profile_core::logging;
use profile_core::prelude::*;

/// profed - view and edit an account profile in the terminal
#[derive(Parser, Debug)]
#[command(name = "profed")]
#[command(about = "View and edit an account profile in the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to $PROFED_CONFIG, then the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start location, e.g. "/profile?editing-section=preferences"
    #[arg(long, value_name = "URL")]
    location: Option<String>,

    /// Print the final account record as JSON on exit
    #[arg(long)]
    print_record: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let settings = load_settings_from(args.config.as_deref())?;
    let location = start_location(args.location.as_deref())?;
    info!(
        "Edit action while another section is open: {}",
        settings.ui.edit_action_when_other_editing
    );

    let record = profile_tui::run(settings, location).await?;

    if args.print_record {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}

/// Parse the `--location` argument.
///
/// Recoverable parse errors fall back to the default location with a warning.
fn start_location(input: Option<&str>) -> Result<Location> {
    match input.map(Location::parse).transpose() {
        Ok(location) => Ok(location.unwrap_or_default()),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!("{}; starting at {}", e, Location::default());
            Ok(Location::default())
        }
    }
}
