//! Fenced code block dispatch.
//!
//! Every fenced block is first offered to the registered
//! [`CodeBlockProcessor`]s (the tabs container is one of them). Blocks no
//! processor claims are rendered by the backend according to their
//! [`FenceInfo`].
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use quill_renderer::{CodeBlockProcessor, ProcessResult};
//!
//! struct MathProcessor;
//!
//! impl CodeBlockProcessor for MathProcessor {
//!     fn process(
//!         &mut self,
//!         info: &str,
//!         _attrs: &HashMap<String, String>,
//!         source: &str,
//!         _index: usize,
//!     ) -> ProcessResult {
//!         if info == "math" {
//!             ProcessResult::Inline(format!("<div class=\"math\">{}</div>", source.trim()))
//!         } else {
//!             ProcessResult::PassThrough
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// `language` optionally followed by `:filename`.
static FENCE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)(?::(.+))?").unwrap());

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the block with a placeholder to be filled after rendering.
    ///
    /// The renderer records where the placeholder lands in the output as a
    /// [`PlaceholderSpan`](crate::PlaceholderSpan).
    Placeholder(String),

    /// Replace the block with HTML immediately.
    Inline(String),

    /// Not handled here; render as a regular code block.
    PassThrough,
}

/// A code block taken out of the document for deferred rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedCodeBlock {
    /// Zero-based index of this code block in the document.
    pub index: usize,
    /// First token of the fence info string.
    pub language: String,
    /// Raw inner text of the block.
    pub source: String,
    /// `key=value` attributes that followed the first token.
    pub attrs: HashMap<String, String>,
}

/// Hook for code blocks that need special rendering.
///
/// Processors are tried in registration order; the first one returning
/// something other than [`ProcessResult::PassThrough`] wins.
pub trait CodeBlockProcessor {
    /// Process a fenced block.
    ///
    /// * `info` - first whitespace-delimited token of the info string
    /// * `attrs` - `key=value` pairs after the first token
    /// * `source` - raw block content, verbatim
    /// * `index` - zero-based code block index, for placeholders
    fn process(
        &mut self,
        info: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult;

    /// Blocks extracted with [`ProcessResult::Placeholder`].
    fn extracted(&self) -> &[ExtractedCodeBlock] {
        &[]
    }

    /// Warnings generated during processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Parsed `language[:filename]` annotation of an ordinary code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenceInfo {
    /// Language token for highlighting.
    pub language: String,
    /// Filename shown in a label above the code.
    pub filename: Option<String>,
}

impl FenceInfo {
    /// Parse a fence info token.
    ///
    /// Returns `None` when the token does not start with a word character,
    /// in which case the block is rendered plain.
    ///
    /// ```
    /// use quill_renderer::FenceInfo;
    ///
    /// let info = FenceInfo::parse("python:server.py").unwrap();
    /// assert_eq!(info.language, "python");
    /// assert_eq!(info.filename.as_deref(), Some("server.py"));
    /// assert_eq!(FenceInfo::parse("python").unwrap().filename, None);
    /// assert!(FenceInfo::parse("").is_none());
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let caps = FENCE_ANNOTATION.captures(token)?;
        Some(Self {
            language: caps[1].to_owned(),
            filename: caps.get(2).map(|m| m.as_str().to_owned()),
        })
    }
}

/// Split a fence info string into its first token and attributes.
///
/// Format: `token [key=value ...]`. Quotes around values are stripped.
#[must_use]
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let token = parts.next().unwrap_or("").to_owned();

    let attrs = parts
        .filter_map(|part| part.split_once('='))
        .map(|(key, value)| {
            let value = value.trim_matches('"').trim_matches('\'');
            (key.to_owned(), value.to_owned())
        })
        .collect();

    (token, attrs)
}
