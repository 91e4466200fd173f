use chrono::Local;

use crate::{
    cli::{
        output, prompts,
        registry::CommandEntry,
        shell_context::{CliMode, CommandResult, ShellContext},
    },
    controller::Outcome,
    currency::Currency,
    errors::CommandError,
    ledger::DATE_FORMAT,
};

const TODAY: &str = "today";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("income", "Record an income amount", "income <amount>", cmd_income),
        CommandEntry::new(
            "expense",
            "Record a dated expense",
            "expense <amount> <reason> <YYYY-MM-DD|today>",
            cmd_expense,
        ),
        CommandEntry::new("goal", "Set the savings goal", "goal <value>", cmd_goal),
        CommandEntry::new(
            "currency",
            "Change the display currency (USD, INR, EUR)",
            "currency [code]",
            cmd_currency,
        ),
        CommandEntry::new("show", "Redraw lists, goal status and chart", "show", cmd_show),
        CommandEntry::new("clear", "Erase all saved data", "clear", cmd_clear),
    ]
}

fn arg(args: &[&str], index: usize) -> String {
    args.get(index).map(|value| value.to_string()).unwrap_or_default()
}

/// Expands the `today` keyword to the local calendar date. Other input is
/// passed through and checked by the ledger.
pub(crate) fn resolve_date(raw: &str) -> String {
    if raw.trim().eq_ignore_ascii_case(TODAY) {
        Local::now().date_naive().format(DATE_FORMAT).to_string()
    } else {
        raw.to_string()
    }
}

fn report(outcome: Outcome, applied: &str) {
    if outcome.is_applied() {
        output::success(applied);
    }
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.controller.form_mut().income = arg(args, 0);
    let outcome = context.controller.submit_income();
    report(outcome, "Income added.");
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let form = context.controller.form_mut();
    form.expense_amount = arg(args, 0);
    form.expense_reason = arg(args, 1);
    form.expense_date = resolve_date(&arg(args, 2));
    let outcome = context.controller.submit_expense();
    report(outcome, "Expense added.");
    Ok(())
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.controller.form_mut().goal = arg(args, 0);
    let outcome = context.controller.submit_goal();
    if context.controller.ledger().goal().is_nan() {
        output::warning("Goal is not a number; it was saved as NaN.");
    }
    report(outcome, "Savings goal set.");
    Ok(())
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let current = context.controller.ledger().currency();
    let selected = match args.first() {
        Some(code) => Some(code.parse::<Currency>()?),
        None if context.mode == CliMode::Interactive => {
            prompts::select_currency(&context.theme, current)?
        }
        None => {
            return Err(CommandError::InvalidArguments(format!(
                "Usage: currency <code>; available: {}",
                Currency::codes().join(", ")
            )))
        }
    };
    if let Some(currency) = selected {
        let outcome = context.controller.select_currency(currency);
        report(outcome, &format!("Display currency set to {}.", currency));
    }
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.controller.render_all();
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.controller.clear_all() == Outcome::Declined {
        output::info("Nothing was cleared.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_expands_to_iso_date() {
        let resolved = resolve_date("Today");
        assert_eq!(resolved.len(), 10);
        assert!(crate::ledger::is_valid_date(&resolved));
    }

    #[test]
    fn other_dates_pass_through() {
        assert_eq!(resolve_date("2024-01-01"), "2024-01-01");
        assert_eq!(resolve_date(""), "");
    }

    #[test]
    fn missing_arguments_become_empty_fields() {
        assert_eq!(arg(&["12"], 0), "12");
        assert_eq!(arg(&["12"], 1), "");
    }
}
