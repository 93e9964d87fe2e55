use super::ui;
use crate::core::config::AppConfig;
use crate::core::{CurrencyAcronym, ExchangeRateResult};
use crate::exchange::ExchangeState;
use anyhow::{Context, Result, anyhow, bail};

/// A rate as rendered to the user, with the converted amount when one was
/// asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub rate: ExchangeRateResult,
    pub amount: Option<f64>,
}

impl Quote {
    pub fn converted(&self) -> Option<f64> {
        self.amount.map(|amount| self.rate.convert(amount))
    }

    /// `1 BRL = 0.2000 USD`
    pub fn rate_line(&self) -> String {
        format!(
            "1 {} = {:.4} {}",
            self.rate.from, self.rate.exchange_rate, self.rate.to
        )
    }

    /// `1,500.00 BRL = 300.00 USD`
    pub fn conversion_line(&self) -> Option<String> {
        let amount = self.amount?;
        Some(format!(
            "{} {} = {} {}",
            ui::format_amount(amount),
            self.rate.from,
            ui::format_amount(self.rate.convert(amount)),
            self.rate.to
        ))
    }
}

/// Shows the rate for `from` -> `to`, and the converted value when an
/// amount is given. Returns what was shown.
pub async fn run(
    state: &ExchangeState,
    from: &str,
    to: &str,
    amount: Option<f64>,
) -> Result<Quote> {
    if let Some(amount) = amount {
        check_amount(amount)?;
    }

    let pb = ui::new_spinner(&format!("Fetching exchange rate {from} -> {to}..."));
    state.request_exchange_rate(from, to);
    state.settle().await;
    pb.finish_and_clear();

    let rate = match state.exchange_rate().get() {
        Ok(Some(rate)) => rate,
        Ok(None) => return Err(anyhow!("No exchange rate published for {from} -> {to}")),
        Err(e) => {
            println!(
                "{}",
                ui::style_text("Could not load the exchange rate.", ui::StyleType::Error)
            );
            return Err(anyhow!("Failed to load exchange rate {from} -> {to}: {e:#}"));
        }
    };

    let quote = Quote { rate, amount };
    println!("{}", quote.rate_line());
    if let Some(line) = quote.conversion_line() {
        println!("{}", ui::style_text(&line, ui::StyleType::Value));
    }
    Ok(quote)
}

/// Parses an amount given on the command line. Infinities and NaN are
/// rejected since they can't be rendered as money.
pub fn parse_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    check_amount(amount).map_err(|e| e.to_string())?;
    Ok(amount)
}

fn check_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        bail!("Amount must be a finite number, got {amount}");
    }
    Ok(())
}

/// Picks the currency pair from the arguments, falling back to the
/// configured defaults.
pub fn resolve_pair(
    config: &AppConfig,
    from: Option<String>,
    to: Option<String>,
) -> Result<(CurrencyAcronym, CurrencyAcronym)> {
    let from = from
        .or_else(|| config.default_from.clone())
        .context("No source currency given and no default_from configured")?;
    let to = to
        .or_else(|| config.default_to.clone())
        .context("No target currency given and no default_to configured")?;

    Ok((normalize_acronym(&from)?, normalize_acronym(&to)?))
}

fn normalize_acronym(acronym: &str) -> Result<CurrencyAcronym> {
    let acronym = acronym.trim();
    if acronym.len() != 3 || !acronym.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("Invalid currency acronym: '{acronym}', expected three letters like USD");
    }
    Ok(acronym.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pair_from_arguments() {
        let config = AppConfig::default();
        let (from, to) =
            resolve_pair(&config, Some("brl".to_string()), Some(" usd ".to_string())).unwrap();
        assert_eq!(from, "BRL");
        assert_eq!(to, "USD");
    }

    #[test]
    fn test_resolve_pair_uses_defaults() {
        let config = AppConfig {
            default_from: Some("EUR".to_string()),
            default_to: Some("JPY".to_string()),
            ..AppConfig::default()
        };
        let (from, to) = resolve_pair(&config, None, Some("GBP".to_string())).unwrap();
        assert_eq!(from, "EUR");
        assert_eq!(to, "GBP");
    }

    #[test]
    fn test_resolve_pair_missing_currency() {
        let config = AppConfig::default();
        let err = resolve_pair(&config, Some("USD".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("default_to"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500").unwrap(), 1500.0);
        assert_eq!(parse_amount(" 0.25 ").unwrap(), 0.25);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert!(parse_amount("abc").unwrap_err().contains("not a number"));
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        for value in ["inf", "-inf", "infinity", "NaN", "nan", "1e400"] {
            let err = parse_amount(value).unwrap_err();
            assert!(err.contains("finite"), "{value}: {err}");
        }
    }

    #[test]
    fn test_quote_lines() {
        let quote = Quote {
            rate: ExchangeRateResult {
                from: "BRL".to_string(),
                to: "USD".to_string(),
                exchange_rate: 0.2,
            },
            amount: Some(1500.0),
        };
        assert_eq!(quote.rate_line(), "1 BRL = 0.2000 USD");
        assert_eq!(
            quote.conversion_line().as_deref(),
            Some("1,500.00 BRL = 300.00 USD")
        );

        let rate_only = Quote {
            amount: None,
            ..quote
        };
        assert!(rate_only.converted().is_none());
        assert!(rate_only.conversion_line().is_none());
    }

    #[test]
    fn test_invalid_acronym() {
        assert!(normalize_acronym("US").is_err());
        assert!(normalize_acronym("US1").is_err());
        assert!(normalize_acronym("DOLLAR").is_err());
        assert_eq!(normalize_acronym("eur").unwrap(), "EUR");
    }
}
