pub mod cli;
pub mod core;
pub mod exchange;
pub mod providers;

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::exchange::ExchangeState;
use crate::providers::HttpCurrencyClient;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Currencies,
    Rate {
        from: Option<String>,
        to: Option<String>,
    },
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Conversor starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let client = HttpCurrencyClient::new(&config.service.base_url)?;
    let state = ExchangeState::new(Arc::new(client));

    match command {
        AppCommand::Currencies => cli::currencies::run(&state).await,
        AppCommand::Rate { from, to } => {
            let (from, to) = cli::rate::resolve_pair(&config, from, to)?;
            cli::rate::run(&state, &from, &to, None).await.map(|_| ())
        }
        AppCommand::Convert { amount, from, to } => {
            let (from, to) = cli::rate::resolve_pair(&config, from, to)?;
            cli::rate::run(&state, &from, &to, Some(amount))
                .await
                .map(|_| ())
        }
    }
}
