use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Table, TableColumn};
use crate::core::calendar::parse_month_key;
use crate::core::ledger_manager::NewTransaction;
use crate::core::services::LedgerFilter;
use crate::currency::format_date;
use crate::domain::category::resolve;
use crate::domain::CategoryKind;

use super::{parse_amount, parse_date, require_args};

const ADD_USAGE: &str = "add <expense|income> <amount> <category> <description> [YYYY-MM-DD]";
const DELETE_USAGE: &str = "delete <id>";
const LIST_USAGE: &str = "list [YYYY-MM] [category]";
const ID_PREFIX_LEN: usize = 8;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an expense or income", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "delete",
            "Delete a transaction by id or id prefix",
            DELETE_USAGE,
            cmd_delete,
        ),
        CommandEntry::new(
            "list",
            "List a month's transactions with totals",
            LIST_USAGE,
            cmd_list,
        ),
    ]
}

fn parse_kind(value: &str) -> Result<CategoryKind, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "expense" | "e" => Ok(CategoryKind::Expense),
        "income" | "i" => Ok(CategoryKind::Income),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown transaction type `{}` (expected expense or income)",
            other
        ))),
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 4, ADD_USAGE)?;
    let kind = parse_kind(args[0])?;
    let amount = parse_amount(args[1])?;
    let date = match args.get(4) {
        Some(raw) => parse_date(raw)?,
        None => context.manager.today(),
    };

    let txn = context.manager.add_transaction(NewTransaction {
        kind,
        amount,
        category: args[2].to_string(),
        description: args[3].to_string(),
        date,
    })?;
    output::success(format!(
        "Added {} of {} in {} on {} (id {})",
        txn.kind.as_str(),
        context.currency(txn.amount),
        txn.category,
        txn.date,
        short_id(&txn.id)
    ));
    warn_over_budget(context, &txn.category);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, DELETE_USAGE)?;
    let removed = context.manager.delete_transaction(args[0])?;
    output::success(format!(
        "Deleted {} ({}, {})",
        removed.description,
        removed.category,
        context.currency(removed.amount)
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut filter = LedgerFilter::for_month(context.manager.today());
    let mut rest = args;
    if let Some(first) = rest.first() {
        if let Some((year, month)) = parse_month_key(first) {
            filter.year = year;
            filter.month = month;
            rest = &rest[1..];
        }
    }
    if let Some(raw) = rest.first() {
        let category = resolve(CategoryKind::Expense, raw)
            .or_else(|| resolve(CategoryKind::Income, raw))
            .ok_or_else(|| CommandError::InvalidArguments(format!("unknown category `{}`", raw)))?;
        filter = filter.with_category(category);
    }

    let (view, totals) = context.manager.filtered(&filter);
    output::section(format!("Transactions {:04}-{:02}", filter.year, filter.month));
    if view.is_empty() {
        output::info("No transactions for this view.");
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("ID"),
            TableColumn::left("Date"),
            TableColumn::left("Type"),
            TableColumn::left("Category"),
            TableColumn::left("Description").max_width(32),
            TableColumn::right("Amount"),
        ]);
        for txn in &view {
            table.push_row(vec![
                short_id(&txn.id).to_string(),
                format_date(txn.date),
                txn.kind.as_str().to_string(),
                txn.category.clone(),
                txn.description.clone(),
                context.currency(txn.amount),
            ]);
        }
        output::line(table.render());
    }
    output::line(format!(
        "Income {}  Expenses {}  Balance {}",
        context.currency(totals.income),
        context.currency(totals.expenses),
        context.currency(totals.balance)
    ));
    Ok(())
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(ID_PREFIX_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

fn warn_over_budget(context: &ShellContext, category: &str) {
    if let Some(record) = context.manager.ledger().budget(category) {
        if record.percentage > 100.0 {
            output::warning(format!(
                "{} is over budget: {} of {} ({:.1}%)",
                record.category,
                context.currency(record.spent),
                context.currency(record.limit),
                record.percentage
            ));
        }
    }
}
