//! Article rendering entry point.
//!
//! Renders one article's content to HTML and keeps the tabs containers it
//! found, so a tab selection can re-render a single pane without parsing
//! the document again.

use tracing::{debug, warn};

use crate::backend::RenderBackend;
use crate::html::HtmlBackend;
use crate::renderer::MarkdownRenderer;
use crate::state::TocEntry;
use crate::tabs::{TabError, TabsContainer, TabsProcessor, parse_tabs};

/// Piece of a rendered article: fixed HTML or a tabs container slot.
#[derive(Clone, Debug)]
enum Segment {
    Html(String),
    Tabs(usize),
}

/// Renders article content with the tabs container extension.
///
/// # Example
///
/// ```
/// use quill_renderer::ArticleRenderer;
///
/// let article = ArticleRenderer::new().render("# Hello\n\nWorld");
/// assert_eq!(article.html(), r#"<h1 id="hello">Hello</h1><p>World</p>"#);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ArticleRenderer {
    gfm: bool,
}

impl ArticleRenderer {
    /// Create a renderer with GFM extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GFM tables, strikethrough and task lists.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Render article content.
    ///
    /// Never fails: malformed tabs containers render fewer tabs, and a
    /// container without any complete file renders nothing.
    #[must_use]
    pub fn render(&self, content: &str) -> RenderedArticle {
        let mut renderer = MarkdownRenderer::<HtmlBackend>::new()
            .with_gfm(self.gfm)
            .with_processor(TabsProcessor::new());
        let result = renderer.render_markdown(content);

        let mut cursor = 0;
        let mut segments = Vec::new();
        let mut containers = Vec::new();

        for block in renderer.extracted_code_blocks() {
            let Some(span) = result.placeholders.iter().find(|s| s.index == block.index) else {
                warn!(index = block.index, "tabs placeholder missing from output");
                continue;
            };
            segments.push(Segment::Html(result.html[cursor..span.range.start].to_owned()));
            cursor = span.range.end;

            let files = parse_tabs(&block.source);
            let id = containers.len();
            match TabsContainer::new(id, files) {
                Some(container) => {
                    debug!(id, tabs = container.files().len(), "rendered tabs container");
                    containers.push(container);
                    segments.push(Segment::Tabs(id));
                }
                None => debug!(index = block.index, "tabs container has no files, skipping"),
            }
        }
        segments.push(Segment::Html(result.html[cursor..].to_owned()));

        RenderedArticle {
            segments,
            containers,
            toc: result.toc,
            warnings: result.warnings,
        }
    }
}

impl Default for ArticleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render article content with default settings.
#[must_use]
pub fn render_article(content: &str) -> RenderedArticle {
    ArticleRenderer::new().render(content)
}

/// A rendered article and the tabs containers it owns.
///
/// Every container starts with its first tab active. Selections live only
/// as long as this value; rendering the content again starts over.
#[derive(Clone, Debug)]
pub struct RenderedArticle {
    segments: Vec<Segment>,
    containers: Vec<TabsContainer>,
    toc: Vec<TocEntry>,
    warnings: Vec<String>,
}

impl RenderedArticle {
    /// Full document HTML with every container at its current selection.
    #[must_use]
    pub fn html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Html(html) => out.push_str(html),
                Segment::Tabs(id) => HtmlBackend::code_tabs(&self.containers[*id], &mut out),
            }
        }
        out
    }

    /// Rendered tabs containers in document order.
    #[must_use]
    pub fn containers(&self) -> &[TabsContainer] {
        &self.containers
    }

    #[must_use]
    pub fn container(&self, id: usize) -> Option<&TabsContainer> {
        self.containers.get(id)
    }

    /// Activate tab `tab` of container `container` and return the HTML of
    /// the re-rendered code pane.
    ///
    /// # Errors
    ///
    /// Returns [`TabError`] for an unknown container or a tab index out of
    /// range. The selection is left unchanged.
    pub fn select_tab(&mut self, container: usize, tab: usize) -> Result<String, TabError> {
        let tabs = self
            .containers
            .get_mut(container)
            .ok_or(TabError::UnknownContainer(container))?;
        tabs.select(tab)?;
        debug!(container, tab, "selected tab");

        let mut pane = String::new();
        HtmlBackend::code_tab_pane(tabs, &mut pane);
        Ok(pane)
    }

    /// Table of contents built from the document headings.
    #[must_use]
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    /// Warnings reported while rendering.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
