use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::{ExpenseService, SummaryService};
use crate::currency::CurrencyLabel;

use super::usage_error;

const BUDGET_USAGE: &str = "budget <amount>";
const CURRENCY_USAGE: &str = "currency [label]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budget",
            "Set the session budget (once)",
            BUDGET_USAGE,
            cmd_budget,
        ),
        CommandEntry::new(
            "summary",
            "Show budget, expenses and balance",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "currency",
            "Show or change the currency label",
            CURRENCY_USAGE,
            cmd_currency,
        ),
    ]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(usage_error(BUDGET_USAGE));
    };
    let amount = ExpenseService::set_budget(&mut context.ledger, raw)?;
    io::print_success(format!(
        "Budget set to {}. It cannot be changed for the rest of this session.",
        context.labeled(amount)
    ));
    context.print_balance();
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = SummaryService::totals(&context.ledger);
    output_section("Summary");
    if !context.ledger.is_budget_set() {
        io::print_hint("No budget set yet. Use `budget <amount>`.");
    }
    io::print_info(format!("  Budget   : {}", context.labeled(totals.budget)));
    io::print_info(format!("  Expenses : {}", context.labeled(totals.expenses)));
    io::print_info(format!("  Balance  : {}", context.labeled(totals.balance)));
    io::print_info(format!("  Entries  : {}", context.ledger.len()));
    Ok(())
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        io::print_info(format!("Currency label: {}", context.currency()));
        return Ok(());
    }

    let label = CurrencyLabel::new(args.join(" "));
    if label.is_empty() {
        return Err(usage_error(CURRENCY_USAGE));
    }
    context.config.currency = label.to_string();
    context.persist_config()?;
    io::print_success(format!("Currency label set to {}.", context.currency()));
    Ok(())
}
