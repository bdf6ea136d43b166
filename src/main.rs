//! Exchange code inspection tool
//!
//! Resolves broker codes and TradingView aliases from the command line, and
//! dumps the compiled-in tables as JSON.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use exchange_codes::infrastructure::logging::init_logging;
use exchange_codes::{parse_exchange, resolve_alias, resolve_code, Config, ExchangeCodeRegistry};

#[derive(Parser, Debug)]
#[command(name = "exchange-codes", version, about = "Exchange code lookups")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Broker code for an exchange under an API context (HOGA, ORDER, BUYABLE)
    Code { exchange: String, context: String },
    /// Canonical exchange name for free text
    Parse { text: String },
    /// Exchange for a TradingView exchange code
    Alias { text: String },
    /// Print every table as JSON
    Table,
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Code { exchange, context } => {
            let parsed =
                parse_exchange(&exchange).ok_or_else(|| anyhow!("unknown exchange: {}", exchange))?;
            resolve_code(parsed, &context)
                .map(str::to_string)
                .ok_or_else(|| anyhow!("no {} code for {}", context, parsed))
        }
        Command::Parse { text } => parse_exchange(&text)
            .map(|e| e.name().to_string())
            .ok_or_else(|| anyhow!("not an exchange name: {}", text)),
        Command::Alias { text } => resolve_alias(&text)
            .map(|e| e.name().to_string())
            .ok_or_else(|| anyhow!("unknown TradingView exchange code: {}", text)),
        Command::Table => serde_json::to_string_pretty(&ExchangeCodeRegistry::global().snapshot())
            .context("failed to serialize registry"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _guard = init_logging(&config.logging)?;

    tracing::debug!(command = ?cli.command, "Running command");
    let output = run(cli.command)?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_code_command() {
        let cli = Cli::try_parse_from(["exchange-codes", "code", "tokyo", "HOGA"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Code { ref exchange, ref context } if exchange == "tokyo" && context == "HOGA"
        ));
    }

    #[test]
    fn test_run_code() {
        let out = run(Command::Code {
            exchange: "tokyo".into(),
            context: "ORDER".into(),
        })
        .unwrap();
        assert_eq!(out, "TKSE");
    }

    #[test]
    fn test_run_misses_are_errors() {
        assert!(run(Command::Code {
            exchange: "tokyo".into(),
            context: "order".into(),
        })
        .is_err());
        assert!(run(Command::Parse { text: "NSE".into() }).is_err());
        assert!(run(Command::Alias { text: "HONGKONG".into() }).is_err());
    }

    #[test]
    fn test_run_alias_and_parse() {
        assert_eq!(run(Command::Alias { text: "arca".into() }).unwrap(), "AMEX");
        assert_eq!(run(Command::Parse { text: "hanoi".into() }).unwrap(), "HANOI");
    }

    #[test]
    fn test_run_table_is_json() {
        let out = run(Command::Table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["contexts"]["HOGA"]["TOKYO"], "TSE");
    }
}
