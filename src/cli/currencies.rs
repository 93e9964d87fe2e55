use super::ui;
use crate::core::CurrencyType;
use crate::exchange::ExchangeState;
use anyhow::{Result, anyhow};
use comfy_table::Cell;

pub async fn run(state: &ExchangeState) -> Result<()> {
    let pb = ui::new_spinner("Fetching currency types...");
    state.request_currency_types();
    state.settle().await;
    pb.finish_and_clear();

    match state.currency_types().get() {
        Ok(currency_types) if currency_types.is_empty() => {
            println!(
                "{}",
                ui::style_text("No currency types available.", ui::StyleType::Subtle)
            );
            Ok(())
        }
        Ok(currency_types) => {
            display_currency_types(&currency_types);
            Ok(())
        }
        Err(e) => {
            println!(
                "{}",
                ui::style_text("Could not load currency types.", ui::StyleType::Error)
            );
            Err(anyhow!("Failed to load currency types: {e:#}"))
        }
    }
}

fn display_currency_types(currency_types: &[CurrencyType]) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Acronym"),
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
    ]);

    for currency in currency_types {
        table.add_row(vec![
            Cell::new(&currency.acronym),
            ui::centered_cell(&currency.symbol),
            Cell::new(&currency.display_name),
        ]);
    }

    println!(
        "\n{}",
        ui::style_text("Available currencies", ui::StyleType::Title)
    );
    println!("{table}");
}
