use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use dexterm::catalog::CatalogClient;
use dexterm::cli::Cli;
use dexterm::config::Config;
use dexterm::logging;
use dexterm::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(base_url) = &cli.base_url {
        config.lookup.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.lookup.debounce_ms = debounce_ms;
    }
    config.validate().context("invalid configuration")?;

    let runtime = Runtime::new().context("failed to start async runtime")?;

    match &cli.name {
        Some(name) => one_shot(&runtime, &config, name, cli.json),
        None => {
            logging::init_tui_tracing();
            ui::runtime::run(&config, runtime.handle().clone())?;
            Ok(())
        }
    }
}

fn one_shot(runtime: &Runtime, config: &Config, name: &str, json: bool) -> anyhow::Result<()> {
    logging::init_stderr_tracing();
    let client = CatalogClient::new(&config.lookup)?;
    let creature = runtime
        .block_on(client.lookup(name))
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&creature)?);
    } else {
        print!("{}", creature.summary());
    }
    Ok(())
}
