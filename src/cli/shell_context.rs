use std::path::PathBuf;

use expense_config::{Config, ConfigManager};

use crate::core::utils::app_data_dir;
use crate::currency::format_labeled;
use crate::ledger::Ledger;

use super::commands;
use super::core::CliError;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one shell session owns: the ledger, preferences, and view state.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Title filter applied by `list` when no filter argument is given.
    pub filter: String,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, app_data_dir())
    }

    pub fn with_base_dir(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;

        let mut registry = CommandRegistry::new();
        for entry in commands::all_definitions() {
            registry.register(entry);
        }

        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });

        Ok(Self {
            mode,
            registry,
            ledger: Ledger::new(),
            config_manager,
            config,
            filter: String::new(),
            running: true,
        })
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn labeled(&self, amount: f64) -> String {
        format_labeled(self.currency(), amount)
    }

    pub fn prompt(&self) -> String {
        if self.ledger.is_budget_set() {
            format!("expenses [{}]> ", self.labeled(self.ledger.balance()))
        } else {
            "expenses> ".to_string()
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
