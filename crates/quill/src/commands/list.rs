//! `quill list` command implementation.

use clap::Args;
use quill_admin::{ArticleList, EXCERPT_LEN, excerpt};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Only list articles whose title contains this keyword.
    #[arg(short, long)]
    search: Option<String>,
}

impl ListArgs {
    /// Print every matching article with its timestamps and a content excerpt.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;
        let client = super::client(&config);

        let mut list = ArticleList::new(super::locale(&config)?);
        let loaded = match &self.search {
            Some(keyword) => list.search(&client, keyword),
            None => list.refresh(&client),
        };
        if loaded.is_err() {
            return Err(CliError::Failed(list.error().unwrap_or_default().to_owned()));
        }

        if list.is_empty() {
            match &self.search {
                Some(keyword) => output.info(&format!("No articles match \"{keyword}\"")),
                None => output.info(&list.empty_message()),
            }
            return Ok(());
        }

        for article in list.articles() {
            output.data(&format!("{:>5}  {}", article.id, article.title));
            output.data(&format!(
                "       created {}  updated {}",
                article.created_at, article.updated_at
            ));
            let preview = excerpt(&article.content, EXCERPT_LEN).replace('\n', " ");
            output.data(&format!("       {preview}"));
        }
        Ok(())
    }
}
