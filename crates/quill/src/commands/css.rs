//! `quill css` command implementation.

use clap::Args;
use quill_renderer::highlight_css;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the css command.
#[derive(Args)]
pub(crate) struct CssArgs {
    /// Highlighting theme (overrides config).
    #[arg(long)]
    theme: Option<String>,

    /// List the available themes instead.
    #[arg(long, conflicts_with = "theme")]
    list_themes: bool,
}

impl CssArgs {
    /// Print the stylesheet for the `hl-` classes used in rendered code.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();

        if self.list_themes {
            for theme in quill_renderer::available_themes() {
                output.data(theme);
            }
            return Ok(());
        }

        let config = global.load_config()?;
        let theme = self.theme.unwrap_or(config.render.theme);
        output.data(&highlight_css(&theme)?);
        Ok(())
    }
}
