//! Line-oriented parser for the inner text of a `tabs` container.
//!
//! A container holds any number of sub-files, each opened by a
//! `` ```language:filename `` line and closed by a bare `` ``` `` line:
//!
//! `````markdown
//! ````tabs
//! ```ts:server.ts
//! serve();
//! ```
//! ```js:client.js
//! connect();
//! ```
//! ````
//! `````
//!
//! The parser is total. Malformed input yields fewer files, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// Opening marker: three backticks, an ASCII word token, a colon and a
/// non-empty filename running to the end of the line.
static OPENING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([A-Za-z0-9_]+):(.+)$").unwrap());

/// Bare closing fence. Must match the whole line exactly.
const CLOSING_FENCE: &str = "```";

/// One file parsed out of a tabs container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlockSpec {
    /// Filename shown on the tab button (may contain dots and slashes).
    pub filename: String,
    /// Language token used for syntax highlighting.
    pub language: String,
    /// Code text with its single trailing line feed removed.
    pub code: String,
}

impl CodeBlockSpec {
    fn open(language: &str, filename: &str) -> Self {
        Self {
            filename: filename.to_owned(),
            language: language.to_owned(),
            code: String::new(),
        }
    }

    fn push_line(mut self, line: &str) -> Self {
        self.code.push_str(line);
        self.code.push('\n');
        self
    }

    fn finish(mut self) -> Self {
        if self.code.ends_with('\n') {
            self.code.pop();
        }
        self
    }
}

/// Parse the raw inner text of a `tabs` container into its files.
///
/// Files are returned in the order their opening markers appear. An opening
/// marker while a file is open closes the previous file. Lines outside any
/// file are dropped, a stray closing fence is ignored, and a file still open
/// at the end of input is discarded.
///
/// # Examples
///
/// ```
/// use quill_renderer::parse_tabs;
///
/// let files = parse_tabs("```ts:a.ts\ncode1\n```\n```js:b.js\ncode2\n```");
/// assert_eq!(files.len(), 2);
/// assert_eq!(files[1].filename, "b.js");
/// assert_eq!(files[1].code, "code2");
/// ```
#[must_use]
pub fn parse_tabs(raw: &str) -> Vec<CodeBlockSpec> {
    let (_unterminated, files) = raw.split('\n').fold(
        (None, Vec::new()),
        |(open, mut files): (Option<CodeBlockSpec>, Vec<CodeBlockSpec>), line| {
            if let Some(caps) = OPENING_MARKER.captures(line) {
                files.extend(open.map(CodeBlockSpec::finish));
                (Some(CodeBlockSpec::open(&caps[1], &caps[2])), files)
            } else if line == CLOSING_FENCE {
                files.extend(open.map(CodeBlockSpec::finish));
                (None, files)
            } else {
                (open.map(|spec| spec.push_line(line)), files)
            }
        },
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spec(language: &str, filename: &str, code: &str) -> CodeBlockSpec {
        CodeBlockSpec {
            filename: filename.to_owned(),
            language: language.to_owned(),
            code: code.to_owned(),
        }
    }

    #[test]
    fn test_two_closed_files() {
        let files = parse_tabs("```ts:a.ts\ncode1\n```\n```js:b.js\ncode2\n```");
        assert_eq!(
            files,
            vec![spec("ts", "a.ts", "code1"), spec("js", "b.js", "code2")]
        );
    }

    #[test]
    fn test_open_while_open_flushes_previous() {
        let files = parse_tabs("```ts:a.ts\ncode1\n```ts:b.ts\ncode2\n```");
        assert_eq!(
            files,
            vec![spec("ts", "a.ts", "code1"), spec("ts", "b.ts", "code2")]
        );
    }

    #[test]
    fn test_unterminated_single_file_dropped() {
        assert!(parse_tabs("```ts:a.ts\ncode1\n").is_empty());
    }

    #[test]
    fn test_unterminated_trailing_file_dropped() {
        let files = parse_tabs("```rs:a.rs\nfn a() {}\n```\n```rs:b.rs\nfn b() {}");
        assert_eq!(files, vec![spec("rs", "a.rs", "fn a() {}")]);
    }

    #[test]
    fn test_lines_before_first_marker_dropped() {
        let files = parse_tabs("stray\nmore stray\n```py:main.py\nprint(1)\n```");
        assert_eq!(files, vec![spec("py", "main.py", "print(1)")]);
    }

    #[test]
    fn test_lines_between_files_dropped() {
        let files = parse_tabs("```py:a.py\na\n```\nbetween\n```py:b.py\nb\n```");
        assert_eq!(files, vec![spec("py", "a.py", "a"), spec("py", "b.py", "b")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_tabs("").is_empty());
    }

    #[test]
    fn test_no_markers() {
        assert!(parse_tabs("just text\n```\nmore text\n```rust\n").is_empty());
    }

    #[test]
    fn test_stray_closing_fence_ignored() {
        let files = parse_tabs("```\n```go:main.go\npackage main\n```\n```");
        assert_eq!(files, vec![spec("go", "main.go", "package main")]);
    }

    #[test]
    fn test_filename_keeps_dots_and_slashes() {
        let files = parse_tabs("```ts:src/routes/api.v2.ts\nx\n```");
        assert_eq!(files[0].filename, "src/routes/api.v2.ts");
    }

    #[test]
    fn test_filename_keeps_colons_and_spaces() {
        let files = parse_tabs("```txt:C:/My Files/notes.txt\nx\n```");
        assert_eq!(files[0].language, "txt");
        assert_eq!(files[0].filename, "C:/My Files/notes.txt");
    }

    #[test]
    fn test_language_without_filename_is_content() {
        let files = parse_tabs("```ts:a.ts\n```js\nlet x;\n```");
        assert_eq!(files, vec![spec("ts", "a.ts", "```js\nlet x;")]);
    }

    #[test]
    fn test_empty_filename_is_not_a_marker() {
        assert!(parse_tabs("```ts:\ncode\n```").is_empty());
    }

    #[test]
    fn test_non_word_language_is_not_a_marker() {
        assert!(parse_tabs("```c++:main.cpp\nint main();\n```").is_empty());
    }

    #[test]
    fn test_indented_fence_is_content() {
        let files = parse_tabs("```sh:run.sh\n  ```\necho hi\n```");
        assert_eq!(files, vec![spec("sh", "run.sh", "  ```\necho hi")]);
    }

    #[test]
    fn test_only_one_trailing_newline_stripped() {
        let files = parse_tabs("```py:a.py\nx = 1\n\n\n```");
        assert_eq!(files[0].code, "x = 1\n\n");
    }

    #[test]
    fn test_empty_file() {
        let files = parse_tabs("```py:empty.py\n```");
        assert_eq!(files, vec![spec("py", "empty.py", "")]);
    }

    #[test]
    fn test_blank_lines_preserved_inside_file() {
        let files = parse_tabs("```py:a.py\ndef f():\n\n    pass\n```");
        assert_eq!(files[0].code, "def f():\n\n    pass");
    }

    #[test]
    fn test_trailing_newline_after_last_fence() {
        let files = parse_tabs("```ts:a.ts\ncode1\n```\n");
        assert_eq!(files, vec![spec("ts", "a.ts", "code1")]);
    }

    #[test]
    fn test_many_files_keep_source_order() {
        let raw: String = (0..5)
            .map(|i| format!("```rs:f{i}.rs\n// {i}\n```\n"))
            .collect();
        let files = parse_tabs(&raw);
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, ["f0.rs", "f1.rs", "f2.rs", "f3.rs", "f4.rs"]);
    }
}
