use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::input::ExpenseInput;
use crate::core::services::{ExpenseService, SummaryService};
use crate::currency::format_amount;
use crate::ledger::ExpenseRecord;

use super::usage_error;

const ADD_USAGE: &str = "add <title> <amount> <date> <category>";
const EDIT_USAGE: &str = "edit <id> <title> <amount> <date> <category>";
const DELETE_USAGE: &str = "delete <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a new expense", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "edit",
            "Replace an expense with new values",
            EDIT_USAGE,
            cmd_edit,
        ),
        CommandEntry::new("delete", "Remove an expense", DELETE_USAGE, cmd_delete)
            .with_aliases(&["rm"]),
        CommandEntry::new(
            "list",
            "List expenses, newest first",
            "list [filter]",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "filter",
            "Set or clear the title filter used by `list`",
            "filter [text]",
            cmd_filter,
        ),
    ]
}

fn input_from(args: &[&str]) -> Option<ExpenseInput> {
    match args {
        [title, amount, date, category] => {
            Some(ExpenseInput::new(*title, *amount, *date, *category))
        }
        _ => None,
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = input_from(args).ok_or_else(|| usage_error(ADD_USAGE))?;
    let record = ExpenseService::add(&mut context.ledger, input)?;
    io::print_success(format!(
        "Added `{}` for {} ({}).",
        record.title,
        context.labeled(record.amount),
        record.id.short()
    ));
    context.print_balance();
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_id, rest)) = args.split_first() else {
        return Err(usage_error(EDIT_USAGE));
    };
    let id = context.resolve_expense(raw_id)?;

    if rest.is_empty() {
        let current = context
            .ledger
            .expense(id)
            .ok_or_else(|| CommandError::InvalidArguments(format!("no expense matches `{raw_id}`")))?;
        io::print_info(format!("Current values: {}", edit_line(current)));
        return Ok(());
    }

    let input = input_from(rest).ok_or_else(|| usage_error(EDIT_USAGE))?;
    let record = ExpenseService::edit(&mut context.ledger, id, input)?;
    io::print_success(format!(
        "Updated `{}` ({} -> {}).",
        record.title,
        id.short(),
        record.id.short()
    ));
    context.print_balance();
    Ok(())
}

/// Renders a record as a ready-to-run `edit` command line.
fn edit_line(record: &ExpenseRecord) -> String {
    let draft = record.to_draft();
    let amount = format_amount(draft.amount);
    let fields = [
        draft.title.as_str(),
        amount.as_str(),
        draft.date.as_str(),
        draft.category.as_str(),
    ];
    let quoted: Vec<String> = fields
        .iter()
        .map(|field| shell_words::quote(field).into_owned())
        .collect();
    format!("edit {} {}", record.id.short(), quoted.join(" "))
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(usage_error(DELETE_USAGE));
    };
    let id = context.resolve_expense(raw_id)?;
    if ExpenseService::remove(&mut context.ledger, id) {
        io::print_success(format!("Deleted expense {}.", id.short()));
        context.print_balance();
    } else {
        io::print_warning(format!("Expense {} was already gone.", id.short()));
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = if args.is_empty() {
        context.filter.clone()
    } else {
        args.join(" ")
    };
    let rows = SummaryService::rows(&context.ledger, &filter, context.currency());

    if filter.trim().is_empty() {
        output_section("Expenses");
    } else {
        output_section(format!("Expenses matching `{}`", filter.trim()));
    }

    if rows.is_empty() {
        if context.ledger.is_empty() {
            io::print_hint("No expenses yet. Use `add` to record one.");
        } else {
            io::print_info("No expenses match the filter.");
        }
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("TITLE").with_max_width(32),
        TableColumn::right("AMOUNT"),
        TableColumn::left("DATE"),
        TableColumn::left("CATEGORY"),
    ]);
    for row in &rows {
        table.push_row(vec![
            row.id.short(),
            row.title.clone(),
            row.amount.clone(),
            row.date.clone(),
            output::badge(&row.category, row.badge_category()),
        ]);
    }
    for line in table.render_lines() {
        io::print_info(line);
    }
    context.print_balance();
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.filter = args.join(" ").trim().to_string();
    if context.filter.is_empty() {
        io::print_info("Filter cleared.");
    } else {
        io::print_info(format!("Filtering titles by `{}`.", context.filter));
    }
    Ok(())
}
