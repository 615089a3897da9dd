//! Markdown article renderer with tabbed multi-file code blocks.
//!
//! [`render_article`] turns article content into HTML. On top of standard
//! (GitHub-flavoured) markdown it understands two code fence extensions:
//!
//! - `language:filename` on an ordinary fence adds a filename label above the
//!   highlighted code.
//! - A fence whose info string is `tabs` holds several such files and renders
//!   as a tab strip with the active file's code below it.
//!
//! # Architecture
//!
//! The generic [`MarkdownRenderer`] walks `pulldown-cmark` events and
//! delegates output-specific elements to a [`RenderBackend`]. Code blocks are
//! first offered to [`CodeBlockProcessor`]s; [`TabsProcessor`] claims tabs
//! containers and [`ArticleRenderer`] turns them into [`TabsContainer`]s that
//! own their tab selection.
//!
//! # Example
//!
//! `````
//! use quill_renderer::render_article;
//!
//! let content = "````tabs\n```ts:a.ts\ncode1\n```\n```js:b.js\ncode2\n```\n````";
//! let mut article = render_article(content);
//!
//! assert_eq!(article.containers()[0].files().len(), 2);
//! let pane = article.select_tab(0, 1).unwrap();
//! assert!(pane.contains("code2"));
//! `````

mod article;
mod backend;
mod code_block;
mod highlight;
mod html;
mod renderer;
mod state;
pub mod tabs;
mod util;

pub use article::{ArticleRenderer, RenderedArticle, render_article};
pub use backend::RenderBackend;
pub use code_block::{CodeBlockProcessor, ExtractedCodeBlock, FenceInfo, ProcessResult};
pub use highlight::{
    CSS_PREFIX, DEFAULT_THEME, HighlightError, available_themes, highlight, highlight_css,
};
pub use html::HtmlBackend;
pub use renderer::{MarkdownRenderer, PlaceholderSpan, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
pub use tabs::{CodeBlockSpec, TabError, TabSelection, TabsContainer, TabsProcessor, parse_tabs};
