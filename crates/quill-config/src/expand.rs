//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key for the error message.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("http://localhost:8080/api", "api.base_url").unwrap(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QUILL_EXPAND_TEST_UNSET");
        }
        assert_eq!(
            expand_env("${QUILL_EXPAND_TEST_UNSET:-ja}", "ui.locale").unwrap(),
            "ja"
        );
    }

    #[test]
    fn test_set_variable_inside_text() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("QUILL_EXPAND_TEST_HOST", "blog.example.com");
        }
        assert_eq!(
            expand_env("https://${QUILL_EXPAND_TEST_HOST}/api", "api.base_url").unwrap(),
            "https://blog.example.com/api"
        );
        unsafe {
            std::env::remove_var("QUILL_EXPAND_TEST_HOST");
        }
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QUILL_EXPAND_TEST_MISSING");
        }
        let err = expand_env("${QUILL_EXPAND_TEST_MISSING}", "api.base_url").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable error in api.base_url: ${QUILL_EXPAND_TEST_MISSING} not set"
        );
    }
}
