//! Code block processor that claims `tabs` containers.
//!
//! The container body is extracted verbatim and replaced by a placeholder.
//! [`ArticleRenderer`](crate::ArticleRenderer) parses the extracted bodies
//! and fills the placeholders once the surrounding document is rendered.

use std::collections::HashMap;

use crate::code_block::{CodeBlockProcessor, ExtractedCodeBlock, ProcessResult};

/// Info string that marks a tabs container.
pub const TABS_LANGUAGE: &str = "tabs";

/// Placeholder left in the rendered HTML for the code block at `index`.
#[must_use]
pub fn placeholder(index: usize) -> String {
    format!("<!--quill-tabs-{index}-->")
}

/// Extracts `tabs` fenced blocks for deferred rendering.
#[derive(Debug, Default)]
pub struct TabsProcessor {
    extracted: Vec<ExtractedCodeBlock>,
}

impl TabsProcessor {
    /// Create a new processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeBlockProcessor for TabsProcessor {
    fn process(
        &mut self,
        info: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult {
        if info != TABS_LANGUAGE {
            return ProcessResult::PassThrough;
        }

        self.extracted.push(ExtractedCodeBlock {
            index,
            language: info.to_owned(),
            source: source.to_owned(),
            attrs: attrs.clone(),
        });
        ProcessResult::Placeholder(placeholder(index))
    }

    fn extracted(&self) -> &[ExtractedCodeBlock] {
        &self.extracted
    }
}
