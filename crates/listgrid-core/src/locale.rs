//! Localization collaborator contract.
//!
//! The renderer looks up short tokens (`true`, `cancel`, `create_new`, …)
//! and formats dates through this trait. The default implementation carries
//! an English table with per-key overrides; a host application can supply
//! its own i18n backend instead.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

/// Default date format when a column has no format option.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default datetime format when a column has no format option.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Token lookup and date formatting.
pub trait Localizer {
    /// Translate a token. Unknown tokens come back humanized rather than
    /// erroring (`"create_new"` → `"Create new"`).
    fn translate(&self, key: &str) -> String;

    /// Locale-format a date with an optional format override.
    fn format_date(&self, date: &NaiveDate, format: Option<&str>) -> String;

    /// Locale-format a datetime with an optional format override.
    fn format_datetime(&self, datetime: &NaiveDateTime, format: Option<&str>) -> String;
}

/// English locale with a built-in token table and per-key overrides.
#[derive(Debug, Clone, Default)]
pub struct DefaultLocale {
    overrides: HashMap<String, String>,
}

impl DefaultLocale {
    /// Create a locale with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override one token.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), text.into());
        self
    }

    fn builtin(key: &str) -> Option<&'static str> {
        match key {
            "true" => Some("True"),
            "false" => Some("False"),
            "create_new" => Some("Create New"),
            "click_to_edit" => Some("Click to edit"),
            "cancel" => Some("Cancel"),
            "loading" => Some("Loading…"),
            "update" => Some("Update"),
            "saving" => Some("Saving…"),
            _ => None,
        }
    }

    fn humanize(key: &str) -> String {
        let text = key.replace('_', " ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => text,
        }
    }
}

impl Localizer for DefaultLocale {
    fn translate(&self, key: &str) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }
        Self::builtin(key).map_or_else(|| Self::humanize(key), str::to_string)
    }

    fn format_date(&self, date: &NaiveDate, format: Option<&str>) -> String {
        date.format(format.unwrap_or(DEFAULT_DATE_FORMAT)).to_string()
    }

    fn format_datetime(&self, datetime: &NaiveDateTime, format: Option<&str>) -> String {
        datetime
            .format(format.unwrap_or(DEFAULT_DATETIME_FORMAT))
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tokens() {
        let locale = DefaultLocale::new();
        assert_eq!(locale.translate("true"), "True");
        assert_eq!(locale.translate("create_new"), "Create New");
    }

    #[test]
    fn test_override_wins() {
        let locale = DefaultLocale::new().with("true", "Yes");
        assert_eq!(locale.translate("true"), "Yes");
        assert_eq!(locale.translate("false"), "False");
    }

    #[test]
    fn test_unknown_token_humanized() {
        let locale = DefaultLocale::new();
        assert_eq!(locale.translate("secret_name"), "Secret name");
    }

    #[test]
    fn test_date_formats() {
        let locale = DefaultLocale::new();
        let date = NaiveDate::from_ymd_opt(2011, 3, 14).unwrap();
        assert_eq!(locale.format_date(&date, None), "2011-03-14");
        assert_eq!(locale.format_date(&date, Some("%d/%m/%Y")), "14/03/2011");
    }

    #[test]
    fn test_datetime_default_format() {
        let locale = DefaultLocale::new();
        let dt = NaiveDate::from_ymd_opt(2011, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(locale.format_datetime(&dt, None), "2011-03-14 09:30:00");
    }
}
