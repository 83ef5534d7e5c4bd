//! docker-tui - list Docker containers and start or stop them with one key
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use dockertui_core::prelude::*;

/// docker-tui - A terminal UI for Docker containers
#[derive(Parser, Debug)]
#[command(name = "dockertui", version)]
#[command(about = "List Docker containers and start or stop them", long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    dockertui_core::logging::init()?;

    let result = dockertui_tui::run().await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}
