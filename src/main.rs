//! Folder Todo MCP Server - Main Entry Point
//!
//! This is the main entry point for the task tracker MCP server.
//! The actual implementation is in the `folder_todo` library.

use anyhow::Result;
use clap::Parser;
use folder_todo::logging::init_logging;
use folder_todo::{Config, TodoServerHandler};
use log::info;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;

/// Folder Todo MCP Server - task lists with deadlines via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the data file (overrides `data_file` from the config)
    file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or flexi_logger spec (overrides `log_level` from the config)
    #[arg(long)]
    log_level: Option<String>,

    /// Do not save the data file on shutdown
    #[arg(long)]
    no_save_on_exit: bool,

    /// Save the data file after every change
    #[arg(long)]
    autosave: bool,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(file) = self.file {
            config.data_file = file;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.no_save_on_exit {
            config.save_on_exit = false;
        }
        if self.autosave {
            config.autosave = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let config = args.apply(config);

    init_logging(&config.log_level, config.log_dir.as_deref())?;
    info!(
        "event=server_start data_file={} autosave={} save_on_exit={}",
        config.data_file.display(),
        config.autosave,
        config.save_on_exit
    );

    let handler = TodoServerHandler::from_config(&config)?;
    serve_stdio(handler).await?;
    Ok(())
}
