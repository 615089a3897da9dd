//! Tabbed multi-file code blocks.
//!
//! A fenced block whose info string is exactly `tabs` holds several named
//! files written with the `language:filename` fence syntax. The outer fence
//! must be longer than the inner ones so the inner closing fences do not end
//! the container:
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
//! # Architecture
//!
//! 1. **Extraction** ([`TabsProcessor`]): claims `tabs` blocks during the
//!    markdown pass and leaves a placeholder.
//! 2. **Parsing** ([`parse_tabs`]): splits the container body into
//!    [`CodeBlockSpec`] files.
//! 3. **Selection** ([`TabsContainer`]): owns the files and the active tab;
//!    the HTML backend renders the tab strip and the active pane only.

mod parser;
mod processor;
mod selection;

pub use parser::{CodeBlockSpec, parse_tabs};
pub use processor::{TABS_LANGUAGE, TabsProcessor, placeholder};
pub use selection::{TabError, TabSelection, TabsContainer};
