mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};

use dstone_core::kernel::config::DStoneConfig;
use dstone_core::kernel::constants;
use dstone_core::kernel::error::{Error, Result};
use dstone_core::plugin_system::error::PluginSystemError;
use dstone_core::ui_bridge::UiManager;
use dstone_core::DStone;

use crate::cli::CliUiProvider;

/// DStone: a pluggable dashboard engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Path to the configuration file (defaults to ./config.yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the plugins directory from the configuration
    #[arg(long)]
    plugins_dir: Option<PathBuf>,

    /// Run in debug mode
    #[arg(long)]
    debug: bool,

    /// Enable hot reloading in the UI host
    #[arg(long)]
    reload: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage plugins
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommand {
    /// List discovered plugins
    List {},
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    if let Err(e) = dstone_main(args).await {
        // The two failure kinds the original entry point distinguishes:
        // dependency errors and everything else. Both exit with status 1.
        match &e {
            Error::PluginSystem(PluginSystemError::DependencyResolution(dep)) => {
                error!("Dependency Error: {}", dep);
            }
            other => {
                error!("An unexpected error occurred: {}", other);
            }
        }
        std::process::exit(1);
    }
}

async fn dstone_main(args: CliArgs) -> Result<()> {
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(constants::CONFIG_FILE_NAME));
    let mut config = DStoneConfig::load_or_default(&config_path)?;

    if args.debug {
        config.dstone.debug = true;
    }
    if args.reload {
        config.dstone.reload = true;
    }
    if let Some(plugins_dir) = args.plugins_dir {
        config.dstone.plugins_dir = plugins_dir;
    }

    let debug = config.dstone.debug;
    let reload = config.dstone.reload;

    let mut ui = UiManager::new();
    ui.register_provider(Box::new(CliUiProvider));
    let mut app = DStone::with_ui(config, ui)?;

    // Registration table: every plugin crate linked into this binary
    // registers its factory here, making it discoverable by manifest.
    app.register_factory(dummy_plugin::ENTRY_POINT, dummy_plugin::factory);

    match args.command {
        Some(Commands::Plugin {
            command: PluginCommand::List {},
        }) => {
            app.discover_plugins().await?;
            let registry = app.registry().lock().await;
            println!("Registered plugins ({}):", registry.plugin_count());
            for name in registry.plugin_names() {
                if let Some(info) = registry.plugin_info(&name) {
                    println!(
                        "  {} (priority {}, dependencies: [{}])",
                        info.descriptor,
                        info.descriptor.priority,
                        info.descriptor.dependencies.join(", ")
                    );
                }
            }
            Ok(())
        }
        None => {
            info!("Starting the application.");
            app.run(debug, reload).await?;
            app.shutdown().await?;
            Ok(())
        }
    }
}
