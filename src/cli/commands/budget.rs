use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{bar, Table, TableColumn};
use crate::currency::format_percentage;
use crate::domain::BudgetStatus;

use super::{parse_amount, parse_period, require_args};

const SET_LIMIT_USAGE: &str = "set-limit <category> <amount>";
const PROGRESS_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budgets",
            "Show this month's budget usage per category",
            "budgets",
            cmd_budgets,
        ),
        CommandEntry::new(
            "set-limit",
            "Change the monthly limit of an expense category",
            SET_LIMIT_USAGE,
            cmd_set_limit,
        ),
        CommandEntry::new(
            "compare",
            "Budget vs actual spending for a period",
            "compare [period]",
            cmd_compare,
        ),
    ]
}

fn cmd_budgets(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let today = context.manager.today();
    output::section(format!("Budgets {}", today.format("%B %Y")));

    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Spent"),
        TableColumn::right("Limit"),
        TableColumn::right("Used"),
        TableColumn::left("Progress"),
        TableColumn::left("Status"),
    ]);
    for record in context.manager.budgets() {
        let status = record.status();
        table.push_row(vec![
            record.category.clone(),
            context.currency(record.spent),
            context.currency(record.limit),
            output::status_colored(
                &format_percentage(record.percentage),
                status == BudgetStatus::Over,
                status == BudgetStatus::Warning,
            ),
            bar(record.progress(), 100.0, PROGRESS_WIDTH),
            status.to_string(),
        ]);
    }
    output::line(table.render());

    for record in context.manager.over_budget() {
        output::warning(format!(
            "{} is over budget by {}",
            record.category,
            context.currency(-record.remaining())
        ));
    }
    Ok(())
}

fn cmd_set_limit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, SET_LIMIT_USAGE)?;
    let limit = parse_amount(args[1])?;
    let record = context.manager.set_limit(args[0], limit)?;
    output::success(format!(
        "{} limit set to {} ({} used)",
        record.category,
        context.currency(record.limit),
        format_percentage(record.percentage)
    ));
    Ok(())
}

fn cmd_compare(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = parse_period(context, args.first())?;
    output::section(format!("Budget vs Actual ({})", period.label()));

    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Spent"),
        TableColumn::right("Budget"),
        TableColumn::right("Difference"),
    ]);
    for row in context.manager.comparison(period) {
        table.push_row(vec![
            row.category.clone(),
            context.currency(row.spent),
            context.currency(row.limit),
            context.currency(row.limit - row.spent),
        ]);
    }
    output::line(table.render());
    Ok(())
}
