mod logging;

use std::process;

use clap::Parser;
use log::{error, info};
use theme_variables_viewer::config::{Cli, ViewerConfig};
use theme_variables_viewer::error::ViewerResult;
use theme_variables_viewer::pipeline::build_variables;
use theme_variables_viewer::server::{ViewerServer, write_variables_json};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = ViewerConfig::from(Cli::parse());

    if let Err(e) = logging::init_logger(config.log_file.as_deref(), config.log_level) {
        // Use eprintln since the logger isn't initialized
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(config: ViewerConfig) -> ViewerResult<()> {
    info!("Checking CSS files...");
    config.validate()?;

    info!("Parsing @theme directives...");
    let organized = build_variables(&config).await?;

    if let Some(path) = &config.json_out {
        write_variables_json(&organized, path).await?;
    }

    if !config.serve {
        return Ok(());
    }

    info!("Starting server...");
    let server = ViewerServer::bind(&organized, &config.ui_dir, config.port).await?;
    info!("Serving {} variables at {}", organized.total(), server.url());
    info!("Press Ctrl+C to stop");

    server.run().await
}
