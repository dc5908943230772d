mod breeding;
mod config;
mod console;
mod host;
mod plugin_manager;
mod world;

use std::path::Path;
use std::time::Duration;

use config::ServerConfig;
use console::ConsoleCommand;
use host::Host;
use keepbaby_plugin::KeepBabyMobs;
use plugin_manager::PluginManager;
use tokio::io::AsyncBufReadExt;
use tracing::{info, warn};
use world::MobWorld;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::load("server.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load server.toml: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        "{} v{} starting ({} TPS, world: {})",
        config.server.name,
        env!("CARGO_PKG_VERSION"),
        config.server.tick_rate,
        config.world.name
    );

    let mut plugins = PluginManager::new();
    plugins.register(Box::new(KeepBabyMobs::new()));
    plugins.load_configs(Path::new(&config.plugins.directory));
    info!("{} plugin(s) loaded", plugins.plugin_count());

    let mut host = Host::new(MobWorld::new(&config.world.name), plugins);
    host.enable_plugins();

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

    // Handle Ctrl+C
    let shutdown_tx_ctrlc = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received");
        let _ = shutdown_tx_ctrlc.send(true);
    });

    // Console REPL: read lines from stdin
    let (console_tx, mut console_rx) = tokio::sync::mpsc::channel::<String>(32);
    tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim().to_string();
            if !line.is_empty() && console_tx.send(line).await.is_err() {
                break;
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(Duration::from_millis(config.server.tick_millis()));
    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                host.game_tick();
            }
            Some(line) = console_rx.recv() => {
                match ConsoleCommand::parse(&line) {
                    Ok(ConsoleCommand::Stop) => {
                        let _ = shutdown_tx.send(true);
                    }
                    Ok(command) => {
                        for reply in host.execute(command).lines() {
                            info!("{reply}");
                        }
                    }
                    Err(e) => warn!("{e}"),
                }
            }
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    host.shutdown();
    info!("Server shut down at tick {}.", host.current_tick());
}
