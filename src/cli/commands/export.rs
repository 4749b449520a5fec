use std::path::PathBuf;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::ExportService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "export",
        "Write all expenses to a CSV file",
        "export [path]",
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = match args {
        [] => context.config.resolve_export_path(),
        parts => PathBuf::from(parts.join(" ")),
    };
    let written = ExportService::export(&context.ledger, &path)?;
    io::print_success(format!(
        "Exported {} expense(s) to {}.",
        written,
        path.display()
    ));
    Ok(())
}
