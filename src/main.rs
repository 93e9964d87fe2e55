use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use conversor::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for conversor::AppCommand {
    fn from(cmd: Commands) -> conversor::AppCommand {
        match cmd {
            Commands::Currencies => conversor::AppCommand::Currencies,
            Commands::Rate { from, to } => conversor::AppCommand::Rate { from, to },
            Commands::Convert { amount, from, to } => {
                conversor::AppCommand::Convert { amount, from, to }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration (at --config-path when given)
    Setup,
    /// List the available currencies
    Currencies,
    /// Display the exchange rate between two currencies
    Rate {
        /// Source currency, e.g. BRL
        from: Option<String>,
        /// Target currency, e.g. USD
        to: Option<String>,
    },
    /// Convert an amount from one currency to another
    Convert {
        /// Amount in the source currency
        #[arg(value_parser = conversor::cli::rate::parse_amount)]
        amount: f64,
        /// Source currency, e.g. BRL
        from: Option<String>,
        /// Target currency, e.g. USD
        to: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => {
            conversor::cli::setup::run(cli.config_path.as_deref()).map(|_| ())
        }
        Some(cmd) => conversor::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_amount_parsing() {
        let cli = Cli::try_parse_from(["conversor", "convert", "1500.5", "BRL", "USD"]).unwrap();
        match cli.command {
            Some(Commands::Convert { amount, .. }) => assert_eq!(amount, 1500.5),
            _ => panic!("Expected the convert command"),
        }
    }

    #[test]
    fn test_convert_rejects_non_finite_amount() {
        for amount in ["inf", "NaN"] {
            let result = Cli::try_parse_from(["conversor", "convert", amount, "BRL", "USD"]);
            assert!(result.is_err(), "{amount} should be rejected");
        }
    }
}
