use colored::Colorize;

use crate::dashboard::ChartSeries;

const BAR_WIDTH: usize = 32;

/// Renders the aggregated period as grouped horizontal bars, one
/// income/expense pair per day, with the running balance as a number.
pub fn render_chart(series: &ChartSeries, currency: &str) -> String {
    let scale = series
        .income
        .iter()
        .chain(series.expense.iter())
        .cloned()
        .fold(0.0_f64, f64::max);

    let label_width = series
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for idx in 0..series.len() {
        if idx > 0 {
            out.push('\n');
        }
        let label = &series.labels[idx];
        out.push_str(&format!(
            "{label:<label_width$}  {} {:>10.2}\n",
            bar(series.income[idx], scale).green(),
            series.income[idx],
        ));
        out.push_str(&format!(
            "{:<label_width$}  {} {:>10.2}\n",
            "",
            bar(series.expense[idx], scale).red(),
            series.expense[idx],
        ));
        out.push_str(&format!(
            "{:<label_width$}  {:>width$} {:>10.2}",
            "",
            "",
            series.balance[idx],
            width = BAR_WIDTH,
        ));
    }

    out.push_str(&format!(
        "\n\nIncome {total_income:.2} {currency} | Expenses {total_expense:.2} {currency} | Balance {net:.2} {currency}",
        total_income = series.total_income,
        total_expense = series.total_expense,
        net = series.net_balance,
    ));
    out
}

fn bar(value: f64, scale: f64) -> String {
    let filled = if scale > 0.0 {
        ((value / scale) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}
