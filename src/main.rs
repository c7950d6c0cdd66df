//! Documentation version router (CLI)
//!
//! ```text
//!   request path ──▶ request::PathDecomposer ──▶ RequestContext
//!                                                     │
//!   channels file ──▶ topology::TopologyStore ──▶ snapshot
//!        ▲                                            │
//!        │                                            ▼
//!   config::TopologyWatcher            resolve (cascade, reverse, redirect)
//!   (watch mode)                                      │
//!                                                     ▼
//!                                        menu::MenuAssembler ──▶ MenuData
//! ```
//!
//! Every command except `watch` loads the channels file once, runs one
//! operation and prints the result as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::sync::mpsc;

use docs_version_router::config::{load_config, RouterConfig};
use docs_version_router::lifecycle::{forward_signals, run_watch, Shutdown, Signals};
use docs_version_router::menu::{MenuAssembler, MenuKind, StatusReport};
use docs_version_router::observability::init_logging;
use docs_version_router::request::PathDecomposer;
use docs_version_router::resolve::{
    channel_and_group_from_version, resolve_group_version, RedirectPlanner,
};
use docs_version_router::topology::{
    decode_version, encode_version, load_topology, ChannelThreshold, ReleaseTopology,
    TopologyStore,
};

#[derive(Parser)]
#[command(name = "docs-router")]
#[command(about = "Resolve documentation versions from release channels", long_about = None)]
struct Cli {
    /// Router configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Channels file, overriding `channels_file` from the configuration.
    #[arg(long)]
    channels: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report topology health and the root version
    Status,
    /// Resolve a group to a concrete version
    Resolve {
        group: String,
        /// Cascade threshold; the configured default when omitted
        #[arg(long)]
        channel: Option<ChannelThreshold>,
    },
    /// Find the group and channel publishing a version
    Reverse { version: String },
    /// Split a request path into language, version and page
    Decompose {
        path: String,
        /// Raw query string (used for the not-found page)
        #[arg(long)]
        query: Option<String>,
    },
    /// Build the version menu for a request path
    Menu {
        path: String,
        #[arg(long, default_value = "version")]
        kind: MenuKind,
    },
    /// Compute the redirect for a request path
    Redirect { path: String },
    /// Encode a version for use in a URL
    Encode { version: String },
    /// Decode a URL segment back into a version
    Decode { segment: String },
    /// Keep the topology in sync with the channels file until interrupted
    Watch,
}

#[derive(Serialize)]
struct Resolution<'a> {
    group: &'a str,
    threshold: ChannelThreshold,
    version: String,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_router_config(cli: &Cli) -> Result<RouterConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(channels) = &cli.channels {
        config.channels_file = channels.display().to_string();
    }
    Ok(config)
}

fn topology(config: &RouterConfig) -> Result<ReleaseTopology, Box<dyn std::error::Error>> {
    Ok(load_topology(Path::new(&config.channels_file))?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_router_config(&cli)?;
    init_logging(&config.observability);

    tracing::debug!(
        channels_file = %config.channels_file,
        default_group = %config.default_group,
        default_channel = %config.default_channel,
        "Configuration loaded"
    );

    let decomposer = PathDecomposer::new(&config.location_versions, &config.languages)?;

    match cli.command {
        Commands::Status => {
            let store = TopologyStore::new();
            let errors = match store.refresh_from_path(Path::new(&config.channels_file)) {
                Ok(_) => Vec::new(),
                Err(e) => vec![e.to_string()],
            };
            print_json(&StatusReport::build(&store, &errors, &config.default_group))?;
        }
        Commands::Resolve { group, channel } => {
            let threshold = channel.unwrap_or(config.default_channel);
            let version = resolve_group_version(&topology(&config)?, &group, threshold)?;
            print_json(&Resolution {
                group: &group,
                threshold,
                version,
            })?;
        }
        Commands::Reverse { version } => {
            print_json(&channel_and_group_from_version(&topology(&config)?, &version))?;
        }
        Commands::Decompose { path, query } => {
            print_json(&decomposer.decompose(&path, query.as_deref()))?;
        }
        Commands::Menu { path, kind } => {
            let topology = topology(&config)?;
            let ctx = decomposer.decompose_uri(&path);
            print_json(&MenuAssembler::new(&topology, &config).build(&ctx, kind))?;
        }
        Commands::Redirect { path } => {
            let planner = RedirectPlanner::new(&config, &decomposer);
            print_json(&planner.plan(&topology(&config)?, &path)?)?;
        }
        Commands::Encode { version } => print_json(&encode_version(&version))?,
        Commands::Decode { segment } => print_json(&decode_version(&segment))?,
        Commands::Watch => {
            tracing::info!("docs-router v{} watching", env!("CARGO_PKG_VERSION"));

            let store = Arc::new(TopologyStore::new());
            let shutdown = Shutdown::new();
            let (reload_tx, reload_rx) = mpsc::unbounded_channel();

            let signals = Signals::new()?;
            tokio::spawn(forward_signals(signals, shutdown.clone(), reload_tx));

            run_watch(&config, store, shutdown.subscribe(), reload_rx).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
