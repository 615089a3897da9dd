//! Render backend trait for output-specific elements.
//!
//! The generic renderer handles block structure and inline formatting;
//! code blocks, tabs containers, block quotes and images go through the
//! backend.

use crate::code_block::FenceInfo;
use crate::tabs::TabsContainer;

/// Backend for output-specific rendering.
pub trait RenderBackend {
    /// Render an ordinary code block.
    ///
    /// * `info` - parsed `language[:filename]`, `None` for plain blocks
    /// * `code` - block content with its trailing line feed removed
    fn code_block(info: Option<&FenceInfo>, code: &str, out: &mut String);

    /// Render a whole tabs container: tab strip plus the active pane.
    fn code_tabs(container: &TabsContainer, out: &mut String);

    /// Render only the active pane of a tabs container.
    fn code_tab_pane(container: &TabsContainer, out: &mut String);

    fn blockquote_start(out: &mut String);

    fn blockquote_end(out: &mut String);

    /// Render an image once its alt text is known.
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a hard break. Default is `<br>`.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule. Default is `<hr>`.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker as a disabled checkbox.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
