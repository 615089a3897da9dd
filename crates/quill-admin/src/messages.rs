//! Localized user-facing messages.

use std::fmt;
use std::str::FromStr;

use quill_articles::ArticlesError;

use crate::validation::MAX_TITLE_LEN;

/// Display language for messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale code that is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'en' or 'ja')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}

/// A user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TitleRequired,
    ContentRequired,
    TitleTooLong,
    LoadFailed,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    ConfirmDelete,
    NoArticles,
    NewArticle,
    EditArticle,
}

impl Message {
    /// Message text in `locale`.
    #[must_use]
    pub fn text(self, locale: Locale) -> String {
        match (self, locale) {
            (Self::TitleRequired, Locale::En) => "Please enter a title".to_owned(),
            (Self::TitleRequired, Locale::Ja) => "タイトルを入力してください".to_owned(),
            (Self::ContentRequired, Locale::En) => "Please enter the content".to_owned(),
            (Self::ContentRequired, Locale::Ja) => "内容を入力してください".to_owned(),
            (Self::TitleTooLong, Locale::En) => {
                format!("Title must be {MAX_TITLE_LEN} characters or fewer")
            }
            (Self::TitleTooLong, Locale::Ja) => {
                format!("タイトルは{MAX_TITLE_LEN}文字以下で入力してください")
            }
            (Self::LoadFailed, Locale::En) => "Failed to load articles".to_owned(),
            (Self::LoadFailed, Locale::Ja) => "記事の取得に失敗しました".to_owned(),
            (Self::CreateFailed, Locale::En) => "Failed to create the article".to_owned(),
            (Self::CreateFailed, Locale::Ja) => "記事の作成に失敗しました".to_owned(),
            (Self::UpdateFailed, Locale::En) => "Failed to update the article".to_owned(),
            (Self::UpdateFailed, Locale::Ja) => "記事の更新に失敗しました".to_owned(),
            (Self::DeleteFailed, Locale::En) => "Failed to delete the article".to_owned(),
            (Self::DeleteFailed, Locale::Ja) => "記事の削除に失敗しました".to_owned(),
            (Self::ConfirmDelete, Locale::En) => "Delete this article?".to_owned(),
            (Self::ConfirmDelete, Locale::Ja) => "この記事を削除しますか？".to_owned(),
            (Self::NoArticles, Locale::En) => {
                "No articles yet. Create the first one!".to_owned()
            }
            (Self::NoArticles, Locale::Ja) => {
                "記事がありません。最初の記事を作成してみましょう！".to_owned()
            }
            (Self::NewArticle, Locale::En) => "New article".to_owned(),
            (Self::NewArticle, Locale::Ja) => "新しい記事を作成".to_owned(),
            (Self::EditArticle, Locale::En) => "Edit article".to_owned(),
            (Self::EditArticle, Locale::Ja) => "記事を編集".to_owned(),
        }
    }
}

/// Text shown for a failed API call: the server's `error` message when it
/// sent one, otherwise the localized `fallback`.
#[must_use]
pub fn failure_message(err: &ArticlesError, fallback: Message, locale: Locale) -> String {
    err.api_message()
        .map_or_else(|| fallback.text(locale), str::to_owned)
}
