//! `quill delete` command implementation.

use clap::Args;
use quill_admin::{AdminSession, Message};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the delete command.
#[derive(Args)]
pub(crate) struct DeleteArgs {
    /// Article ID.
    id: i64,

    /// Delete without asking for confirmation.
    #[arg(short, long)]
    yes: bool,
}

impl DeleteArgs {
    /// Delete an article after confirmation.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;
        let locale = super::locale(&config)?;

        if !self.yes && !output.confirm(&Message::ConfirmDelete.text(locale))? {
            output.info("Cancelled.");
            return Ok(());
        }

        let mut session = AdminSession::new(super::client(&config), locale);
        if session.delete(self.id).is_err() {
            let message = session.list().error().unwrap_or_default().to_owned();
            return Err(CliError::Failed(message));
        }

        output.success(&format!("Deleted article {}", self.id));
        Ok(())
    }
}
