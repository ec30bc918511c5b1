pub mod budget;
pub mod config;
pub mod export;
pub mod insight;
pub mod system;
pub mod transaction;

use chrono::NaiveDate;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;
use crate::cli::shell_context::ShellContext;
use crate::domain::PeriodSelector;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        system::definitions(),
        transaction::definitions(),
        budget::definitions(),
        insight::definitions(),
        export::definitions(),
        config::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}

pub(crate) fn require_args(args: &[&str], count: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() < count {
        return Err(CommandError::InvalidArguments(format!("usage: {}", usage)));
    }
    Ok(())
}

pub(crate) fn parse_amount(value: &str) -> Result<f64, CommandError> {
    let cleaned: String = value
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("`{}` is not a valid amount", value)))
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a date (expected YYYY-MM-DD)", value))
    })
}

/// Optional period argument, falling back to the configured default.
pub(crate) fn parse_period(
    context: &ShellContext,
    value: Option<&&str>,
) -> Result<PeriodSelector, CommandError> {
    match value {
        Some(raw) => raw.parse().map_err(CommandError::Core),
        None => Ok(context.config.default_period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_grouping_and_symbol() {
        assert_eq!(parse_amount("₹1,500").unwrap(), 1500.0);
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn dates_require_iso_format() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").is_err());
    }

    #[test]
    fn require_args_reports_usage() {
        let err = require_args(&["a"], 2, "cmd <a> <b>").unwrap_err();
        assert_eq!(err.to_string(), "usage: cmd <a> <b>");
    }
}
