//! `quill create` and `quill update` command implementations.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args};
use quill_admin::{AdminSession, SubmitError};
use quill_articles::ArticlesClient;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the create command.
#[derive(Args)]
#[command(group(ArgGroup::new("body").required(true).args(["content", "file"])))]
pub(crate) struct CreateArgs {
    /// Article title.
    #[arg(short, long)]
    title: String,

    /// Markdown content.
    #[arg(long)]
    content: Option<String>,

    /// Read markdown content from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl CreateArgs {
    /// Create an article.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;
        let content = read_content(self.content, self.file.as_deref())?.unwrap_or_default();

        let mut session = AdminSession::new(super::client(&config), super::locale(&config)?);
        let form = session.start_create();
        form.set_title(self.title);
        form.set_content(content);

        let (id, title) = save(&mut session)?;
        output.success(&format!("Created article {id} \"{title}\""));
        report_list(&output, &session);
        Ok(())
    }
}

/// Arguments for the update command.
#[derive(Args)]
#[command(group(ArgGroup::new("body").args(["content", "file"])))]
pub(crate) struct UpdateArgs {
    /// Article ID.
    id: i64,

    /// New title (default: keep the current one).
    #[arg(short, long)]
    title: Option<String>,

    /// New markdown content (default: keep the current one).
    #[arg(long)]
    content: Option<String>,

    /// Read new markdown content from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl UpdateArgs {
    /// Update an article. Fields not given keep their current value.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;
        let content = read_content(self.content, self.file.as_deref())?;

        let mut session = AdminSession::new(super::client(&config), super::locale(&config)?);
        if session.refresh().is_err() {
            let message = session.list().error().unwrap_or_default().to_owned();
            return Err(CliError::Failed(message));
        }
        let Some(form) = session.start_edit(self.id) else {
            return Err(CliError::Failed(format!("Article {} not found", self.id)));
        };
        if let Some(title) = self.title {
            form.set_title(title);
        }
        if let Some(content) = content {
            form.set_content(content);
        }

        let (id, title) = save(&mut session)?;
        output.success(&format!("Updated article {id} \"{title}\""));
        report_list(&output, &session);
        Ok(())
    }
}

/// Content from `--content` or `--file`.
fn read_content(content: Option<String>, file: Option<&Path>) -> Result<Option<String>, CliError> {
    match (content, file) {
        (Some(content), _) => Ok(Some(content)),
        (None, Some(path)) => Ok(Some(std::fs::read_to_string(path)?)),
        (None, None) => Ok(None),
    }
}

/// Submit the open form, mapping failures to the form's message.
fn save(session: &mut AdminSession<ArticlesClient>) -> Result<(i64, String), CliError> {
    match session.save() {
        Ok(article) => Ok((article.id, article.title)),
        Err(err) => {
            let message = session
                .form()
                .and_then(|form| form.error())
                .map_or_else(|| err.to_string(), str::to_owned);
            Err(match err {
                SubmitError::Validation(_) => CliError::Validation(message),
                SubmitError::Api(_) | SubmitError::NoForm => CliError::Failed(message),
            })
        }
    }
}

fn report_list(output: &Output, session: &AdminSession<ArticlesClient>) {
    match session.list().error() {
        Some(error) => output.warning(error),
        None => output.detail(&format!("{} articles", session.list().articles().len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_content_prefers_inline() {
        let content = read_content(Some("inline".to_owned()), None).unwrap();
        assert_eq!(content.as_deref(), Some("inline"));
        assert_eq!(read_content(None, None).unwrap(), None);
    }

    #[test]
    fn test_read_content_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "# Post\n").unwrap();

        let content = read_content(None, Some(&path)).unwrap();
        assert_eq!(content.as_deref(), Some("# Post\n"));
    }

    #[test]
    fn test_read_content_missing_file() {
        let err = read_content(None, Some(Path::new("/nonexistent/post.md"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
