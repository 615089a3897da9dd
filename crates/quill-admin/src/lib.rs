//! Admin view state for Quill.
//!
//! Models the administrator's workflow over an
//! [`ArticleStore`](quill_articles::ArticleStore):
//!
//! - [`ArticleList`]: the collection as last loaded, refreshed explicitly
//! - [`ArticleForm`]: create/edit input with [`validate`] run before any request
//! - [`AdminSession`]: list plus at most one open form
//!
//! Failures never discard state. They leave a localized message (see
//! [`Locale`] and [`Message`]) next to what was shown before.

mod form;
mod list;
mod messages;
mod session;
mod validation;

pub use form::{ArticleForm, FormMode, SubmitError};
pub use list::{ArticleList, EXCERPT_LEN, excerpt};
pub use messages::{Locale, Message, UnknownLocale, failure_message};
pub use session::AdminSession;
pub use validation::{MAX_TITLE_LEN, ValidationError, validate};
