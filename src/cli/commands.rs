use std::{env, fs};

use chrono::{NaiveDate, Utc};

use crate::{
    cli::{chart_view, output, table::{Alignment, Table, TableColumn}},
    config::ConfigManager,
    dashboard::{aggregate, ChartSeries},
    domain::{parse_payload, Period, Transaction},
    errors::{FinanceError, Result},
    storage::{JsonStorage, StorageBackend},
};

const DEFAULT_PROFILE: &str = "default";

/// Entry point for the one-shot CLI.
pub fn run_cli() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    dispatch(&args)
}

pub fn dispatch(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("chart") => cmd_chart(&args[1..]),
        Some("list") => cmd_list(&args[1..]),
        Some("import") => cmd_import(&args[1..]),
        Some("help") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            output::warning(format!("Unknown command `{other}`."));
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    output::section("FotoConnect finance CLI");
    output::info("Usage:");
    output::info("  fotoconnect_cli chart [--period 7d|30d|month] [--today YYYY-MM-DD] [--profile NAME | --file PATH]");
    output::info("  fotoconnect_cli list [--profile NAME | --file PATH]");
    output::info("  fotoconnect_cli import FILE [--profile NAME]");
    output::info("  fotoconnect_cli help");
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut idx = 0;
    while idx < args.len() {
        if args[idx].starts_with("--") {
            idx += 2;
            continue;
        }
        return Some(args[idx].as_str());
    }
    None
}

fn load_transactions(args: &[String]) -> Result<Vec<Transaction>> {
    if let Some(path) = flag_value(args, "--file") {
        let data = fs::read_to_string(path)?;
        return parse_payload(&data);
    }
    let profile = flag_value(args, "--profile").unwrap_or(DEFAULT_PROFILE);
    let storage = JsonStorage::new_default()?;
    storage.load_transactions(profile)
}

fn resolve_today(args: &[String]) -> Result<NaiveDate> {
    match flag_value(args, "--today") {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(Utc::now().date_naive()),
    }
}

fn cmd_chart(args: &[String]) -> Result<()> {
    let config = ConfigManager::new()?.load()?;
    let period = Period::from_tag(
        flag_value(args, "--period").unwrap_or(config.default_period.as_str()),
    );
    let today = resolve_today(args)?;
    let transactions = load_transactions(args)?;

    tracing::debug!(%period, %today, count = transactions.len(), "rendering chart");
    let buckets = aggregate(&transactions, period, today);
    let series = ChartSeries::from_buckets(&buckets, config.date_format);

    output::section(format!("{period} ({} days)", buckets.len()));
    if series.is_empty() {
        output::info("No data to display.");
        return Ok(());
    }
    output::info(chart_view::render_chart(&series, &config.currency));
    Ok(())
}

fn cmd_list(args: &[String]) -> Result<()> {
    let config = ConfigManager::new()?.load()?;
    let mut transactions = load_transactions(args)?;
    transactions.sort_by_key(|txn| (txn.date, txn.id));

    if transactions.is_empty() {
        output::info("No data to display.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Kind", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Category", Alignment::Left),
    ]);
    for txn in &transactions {
        table.push_row(vec![
            txn.date.format(config.date_format.pattern()).to_string(),
            txn.kind.to_string(),
            format!("{:.2} {}", txn.amount_major(), config.currency),
            txn.category.clone().unwrap_or_default(),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_import(args: &[String]) -> Result<()> {
    let path = positional(args)
        .ok_or_else(|| FinanceError::InvalidInput("import requires a payload file".into()))?;
    let profile = flag_value(args, "--profile").unwrap_or(DEFAULT_PROFILE);

    let data = fs::read_to_string(path)?;
    let transactions = parse_payload(&data)?;
    let storage = JsonStorage::new_default()?;
    storage.save_transactions(profile, &transactions)?;
    output::success(format!(
        "Imported {} transactions into profile `{profile}`.",
        transactions.len()
    ));
    Ok(())
}
