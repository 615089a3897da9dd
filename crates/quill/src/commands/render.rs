//! `quill show` and `quill render` command implementations.

use std::path::PathBuf;

use clap::Args;
use quill_articles::ArticleStore;
use quill_renderer::{ArticleRenderer, RenderedArticle};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Article ID.
    id: i64,

    /// Activate tab TAB of tabs container CONTAINER (both zero-based).
    #[arg(long = "select", value_name = "CONTAINER:TAB", value_parser = parse_selection)]
    selections: Vec<(usize, usize)>,
}

impl ShowArgs {
    /// Fetch an article and print its HTML.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;

        let article = super::client(&config).get(self.id)?;
        output.highlight(&article.title);
        output.detail(&format!(
            "created {}  updated {}",
            article.created_at, article.updated_at
        ));

        let renderer = ArticleRenderer::new().with_gfm(config.render.gfm);
        let rendered = render_selected(&renderer, &article.content, &self.selections)?;
        print_rendered(&output, &rendered);
        Ok(())
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the markdown file.
    file: PathBuf,

    /// Activate tab TAB of tabs container CONTAINER (both zero-based).
    #[arg(long = "select", value_name = "CONTAINER:TAB", value_parser = parse_selection)]
    selections: Vec<(usize, usize)>,
}

impl RenderArgs {
    /// Render a local markdown file and print its HTML.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;

        let content = std::fs::read_to_string(&self.file)?;
        output.info(&format!("Rendering {}...", self.file.display()));

        let renderer = ArticleRenderer::new().with_gfm(config.render.gfm);
        let rendered = render_selected(&renderer, &content, &self.selections)?;
        print_rendered(&output, &rendered);
        Ok(())
    }
}

/// Parse a `CONTAINER:TAB` selection.
fn parse_selection(value: &str) -> Result<(usize, usize), String> {
    let (container, tab) = value
        .split_once(':')
        .ok_or_else(|| format!("expected CONTAINER:TAB, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("'{part}' is not a tab index"))
    };
    Ok((parse(container)?, parse(tab)?))
}

/// Render content and apply tab selections in order.
fn render_selected(
    renderer: &ArticleRenderer,
    content: &str,
    selections: &[(usize, usize)],
) -> Result<RenderedArticle, CliError> {
    let mut rendered = renderer.render(content);
    for &(container, tab) in selections {
        rendered.select_tab(container, tab)?;
    }
    Ok(rendered)
}

fn print_rendered(output: &Output, rendered: &RenderedArticle) {
    for warning in rendered.warnings() {
        output.warning(warning);
    }
    output.detail(&format!(
        "{} tabs containers, {} headings",
        rendered.containers().len(),
        rendered.toc().len()
    ));
    output.data(&rendered.html());
}
