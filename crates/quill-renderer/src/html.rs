//! HTML backend.
//!
//! Code blocks are highlighted server-side with `hl-` classes and keep a
//! `language-*` class for client-side tooling. Tabs containers follow the
//! WAI-ARIA tabs pattern, with only the active pane in the output.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::code_block::FenceInfo;
use crate::highlight::highlight;
use crate::state::escape_html;
use crate::tabs::TabsContainer;

/// HTML render backend.
///
/// Produces:
/// - `<div class="code-block">` with an optional `code-filename` label and
///   a highlighted `<pre class="code language-*">` for annotated blocks
/// - bare `<pre><code>` for blocks without a language
/// - `<div class="code-tabs">` with a `tablist` and one `tabpanel` for
///   tabs containers
pub struct HtmlBackend;

impl HtmlBackend {
    fn highlighted_pre(language: &str, code: &str, out: &mut String) {
        write!(
            out,
            r#"<pre class="code language-{}"><code>"#,
            escape_html(language)
        )
        .unwrap();
        highlight(language, code, out);
        out.push_str("</code></pre>");
    }
}

impl RenderBackend for HtmlBackend {
    fn code_block(info: Option<&FenceInfo>, code: &str, out: &mut String) {
        let Some(info) = info else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(code)).unwrap();
            return;
        };

        out.push_str(r#"<div class="code-block">"#);
        if let Some(filename) = &info.filename {
            write!(
                out,
                r#"<div class="code-filename">{}</div>"#,
                escape_html(filename)
            )
            .unwrap();
        }
        Self::highlighted_pre(&info.language, code, out);
        out.push_str("</div>");
    }

    fn code_tabs(container: &TabsContainer, out: &mut String) {
        let id = container.id();
        let active = container.active_index();

        write!(out, r#"<div class="code-tabs" id="code-tabs-{id}">"#).unwrap();
        out.push_str(r#"<div class="code-tabs-buttons" role="tablist">"#);
        for (idx, file) in container.files().iter().enumerate() {
            let selected = idx == active;
            write!(
                out,
                r#"<button type="button" role="tab" id="code-tab-{id}-{idx}" aria-controls="code-panel-{id}" aria-selected="{selected}" tabindex="{}" data-tab="{idx}">{}</button>"#,
                if selected { "0" } else { "-1" },
                escape_html(&file.filename)
            )
            .unwrap();
        }
        out.push_str("</div>");
        Self::code_tab_pane(container, out);
        out.push_str("</div>");
    }

    fn code_tab_pane(container: &TabsContainer, out: &mut String) {
        let id = container.id();
        let active = container.active_index();
        let file = container.active_file();

        write!(
            out,
            r#"<div role="tabpanel" id="code-panel-{id}" aria-labelledby="code-tab-{id}-{active}">"#
        )
        .unwrap();
        Self::highlighted_pre(&file.language, &file.code, out);
        out.push_str("</div>");
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::CodeBlockSpec;

    fn info(token: &str) -> FenceInfo {
        FenceInfo::parse(token).unwrap()
    }

    fn container() -> TabsContainer {
        let files = vec![
            CodeBlockSpec {
                filename: "a.ts".to_owned(),
                language: "ts".to_owned(),
                code: "code1".to_owned(),
            },
            CodeBlockSpec {
                filename: "b.js".to_owned(),
                language: "js".to_owned(),
                code: "code2".to_owned(),
            },
        ];
        TabsContainer::new(0, files).unwrap()
    }

    #[test]
    fn test_code_block_with_filename_header() {
        let mut out = String::new();
        HtmlBackend::code_block(Some(&info("python:server.py")), "print(1)", &mut out);
        assert!(out.starts_with(r#"<div class="code-block"><div class="code-filename">server.py</div>"#));
        assert!(out.contains(r#"<pre class="code language-python">"#));
        assert!(out.contains(r#"class="hl-"#));
    }

    #[test]
    fn test_code_block_language_only_has_no_header() {
        let mut out = String::new();
        HtmlBackend::code_block(Some(&info("python")), "print(1)", &mut out);
        assert!(out.starts_with(r#"<div class="code-block"><pre class="code language-python">"#));
        assert!(!out.contains("code-filename"));
    }

    #[test]
    fn test_code_block_without_language_is_plain() {
        let mut out = String::new();
        HtmlBackend::code_block(None, "a < b", &mut out);
        assert_eq!(out, "<pre><code>a &lt; b</code></pre>");
    }

    #[test]
    fn test_filename_is_escaped() {
        let mut out = String::new();
        HtmlBackend::code_block(Some(&info("html:<x>.html")), "", &mut out);
        assert!(out.contains("&lt;x&gt;.html"));
    }

    #[test]
    fn test_code_tabs_strip_and_active_pane() {
        let mut out = String::new();
        HtmlBackend::code_tabs(&container(), &mut out);

        assert!(out.starts_with(r#"<div class="code-tabs" id="code-tabs-0">"#));
        assert!(out.contains(r#"role="tablist""#));
        assert!(out.contains(r#"id="code-tab-0-0" aria-controls="code-panel-0" aria-selected="true" tabindex="0" data-tab="0">a.ts</button>"#));
        assert!(out.contains(r#"id="code-tab-0-1" aria-controls="code-panel-0" aria-selected="false" tabindex="-1" data-tab="1">b.js</button>"#));
        assert!(out.contains(r#"aria-labelledby="code-tab-0-0""#));
        assert!(out.contains("code1"));
        assert!(!out.contains("code2"));
    }

    #[test]
    fn test_code_tab_pane_follows_selection() {
        let mut container = container();
        container.select(1).unwrap();

        let mut out = String::new();
        HtmlBackend::code_tab_pane(&container, &mut out);
        assert!(out.starts_with(r#"<div role="tabpanel" id="code-panel-0" aria-labelledby="code-tab-0-1">"#));
        assert!(out.contains(r#"language-js"#));
        assert!(out.contains("code2"));
        assert!(!out.contains("code1"));
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        HtmlBackend::image("image.png", "Alt text", "Image title", &mut out);
        assert_eq!(
            out,
            r#"<img src="image.png" title="Image title" alt="Alt text">"#
        );
    }

    #[test]
    fn test_blockquote() {
        let mut out = String::new();
        HtmlBackend::blockquote_start(&mut out);
        out.push_str("content");
        HtmlBackend::blockquote_end(&mut out);
        assert_eq!(out, "<blockquote>content</blockquote>");
    }
}
