//! Shell dispatch, error types, and shared command helpers.

use std::io;

use expense_config::ConfigError;
use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::core::services::{ServiceError, SummaryService};
use crate::errors::LedgerError;
use crate::ledger::{ExpenseId, SHORT_ID_LEN};

use super::io as cli_io;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command. Reported to the user; the shell keeps running.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<LedgerError> for CommandError {
    fn from(err: LedgerError) -> Self {
        CommandError::Service(ServiceError::Ledger(err))
    }
}

/// Failure that ends the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action("Exit shell? Unexported expenses will be lost.", false)
            .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Service(ServiceError::Ledger(LedgerError::AlreadySet)) => {
                cli_io::print_error("Budget has already been set for this session.");
                cli_io::print_hint("The budget is locked; restart the shell to begin a new one.");
                Ok(())
            }
            CommandError::Service(ServiceError::Ledger(
                err @ LedgerError::InsufficientBalance { .. },
            )) => {
                cli_io::print_error(err);
                if !self.ledger.is_budget_set() {
                    cli_io::print_hint("Set a budget first with `budget <amount>`.");
                }
                Ok(())
            }
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }

    /// Resolves a full id or an unambiguous id prefix to a record identifier.
    pub(crate) fn resolve_expense(&self, raw: &str) -> Result<ExpenseId, CommandError> {
        if let Ok(id) = raw.parse::<ExpenseId>() {
            if self.ledger.expense(id).is_some() {
                return Ok(id);
            }
        }

        let matches: Vec<ExpenseId> = self
            .ledger
            .matching_prefix(raw)
            .map(|record| record.id)
            .collect();
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(CommandError::InvalidArguments(format!(
                "no expense matches `{}`",
                raw
            ))),
            _ => Err(CommandError::InvalidArguments(format!(
                "`{}` matches {} expenses; type more of the id (shown as {} characters in `list`)",
                raw,
                matches.len(),
                SHORT_ID_LEN
            ))),
        }
    }

    pub(crate) fn print_balance(&self) {
        let totals = SummaryService::totals(&self.ledger);
        cli_io::print_info(format!(
            "Budget: {} | Expenses: {} | Balance: {}",
            self.labeled(totals.budget),
            self.labeled(totals.expenses),
            self.labeled(totals.balance)
        ));
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    base: std::path::PathBuf,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_base_dir(CliMode::Script, base)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
