use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{bar, Table, TableColumn};
use crate::currency::format_percentage;
use crate::domain::Trend;

use super::parse_period;

const BAR_WIDTH: usize = 30;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "insights",
            "Spending summary for a period",
            "insights [current-month|last-3-months|last-6-months|current-year]",
            cmd_insights,
        ),
        CommandEntry::new(
            "categories",
            "Expense breakdown by category for a period",
            "categories [period]",
            cmd_categories,
        ),
        CommandEntry::new(
            "trend",
            "Monthly expense totals for the last six active months",
            "trend",
            cmd_trend,
        ),
    ]
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up (spending more than last month)",
        Trend::Down => "down (spending less than last month)",
        Trend::Neutral => "neutral",
    }
}

fn cmd_insights(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = parse_period(context, args.first())?;
    let summary = context.manager.insights(period);

    output::section(format!("Insights ({})", period.label()));
    output::line(format!("  Total spent   : {}", context.currency(summary.total_spent)));
    output::line(format!("  Daily average : {}", context.currency(summary.average_daily)));
    let top = if summary.top_category.is_empty() {
        "-"
    } else {
        summary.top_category.as_str()
    };
    output::line(format!("  Top category  : {}", top));
    output::line(format!("  Trend         : {}", trend_label(summary.trend)));
    output::line(format!(
        "  Savings rate  : {}",
        format_percentage(summary.savings_rate)
    ));
    if summary.savings_rate < 0.0 {
        output::warning("Spending exceeds income for this period.");
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = parse_period(context, args.first())?;
    let slices = context.manager.chart_slices(period);

    output::section(format!("Spending by Category ({})", period.label()));
    if slices.is_empty() {
        output::info("No expenses in this period.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::right("Share"),
        TableColumn::left(""),
    ]);
    for slice in &slices {
        table.push_row(vec![
            slice.category.clone(),
            context.currency(slice.amount),
            format_percentage(slice.share),
            bar(slice.share, 100.0, BAR_WIDTH),
        ]);
    }
    output::line(table.render());
    Ok(())
}

fn cmd_trend(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let series = context.manager.monthly_series();
    output::section("Monthly Spending");
    if series.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    let max = series.amounts.iter().copied().fold(0.0, f64::max);
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Spent"),
        TableColumn::left(""),
    ]);
    for (label, amount) in series.iter() {
        table.push_row(vec![
            label.to_string(),
            context.currency(amount),
            bar(amount, max, BAR_WIDTH),
        ]);
    }
    output::line(table.render());
    Ok(())
}
