//! Company settings record edited on the admin settings screen.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(AppError::parse(format!("unknown theme '{other}'"))),
        }
    }
}

/// Currencies offered in the settings form.
pub const CURRENCIES: [&str; 6] = ["USD", "EUR", "GBP", "JPY", "INR", "AUD"];

/// Company-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub company_name: String,
    pub currency: String,
    #[serde(default)]
    pub logo_url: String,
    pub email_notifications: bool,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_name: "Acme Corporation".to_string(),
            currency: "USD".to_string(),
            logo_url: String::new(),
            email_notifications: true,
            theme: Theme::System,
        }
    }
}

/// A single field change on the settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
    CompanyName(String),
    Currency(String),
    LogoUrl(String),
    ToggleEmailNotifications,
    Theme(Theme),
}

impl CompanySettings {
    /// Return a new record with one field changed.
    #[must_use]
    pub fn with_edit(&self, edit: SettingsEdit) -> Self {
        let mut next = self.clone();
        match edit {
            SettingsEdit::CompanyName(name) => next.company_name = name,
            SettingsEdit::Currency(currency) => next.currency = currency,
            SettingsEdit::LogoUrl(url) => next.logo_url = url,
            SettingsEdit::ToggleEmailNotifications => next.email_notifications = !self.email_notifications,
            SettingsEdit::Theme(theme) => next.theme = theme,
        }
        next
    }

    /// Validate before persisting.
    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(AppError::validation("Company name is required"));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::validation(format!(
                "Currency must be a three-letter ISO code, got '{}'",
                self.currency
            )));
        }
        let logo = self.logo_url.trim();
        if !logo.is_empty() && !(logo.starts_with("http://") || logo.starts_with("https://")) {
            return Err(AppError::validation("Logo URL must start with http:// or https://"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = CompanySettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.theme, Theme::System);
        assert!(settings.email_notifications);
    }

    #[test]
    fn test_toggle_email_changes_only_that_field() {
        let before = CompanySettings::default();
        let after = before.with_edit(SettingsEdit::ToggleEmailNotifications);

        assert_eq!(after.email_notifications, !before.email_notifications);
        assert_eq!(
            CompanySettings {
                email_notifications: before.email_notifications,
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_theme_dark_after_system_changes_only_theme() {
        let before = CompanySettings::default();
        assert_eq!(before.theme, Theme::System);

        let after = before.with_edit(SettingsEdit::Theme(Theme::Dark));
        assert_eq!(after.theme, Theme::Dark);
        assert_eq!(
            CompanySettings {
                theme: Theme::System,
                ..after
            },
            before
        );
    }

    #[test]
    fn test_edit_leaves_original_untouched() {
        let before = CompanySettings::default();
        let _ = before.with_edit(SettingsEdit::CompanyName("Globex".to_string()));
        assert_eq!(before.company_name, "Acme Corporation");
    }

    #[test]
    fn test_validate_currency() {
        let settings = CompanySettings::default().with_edit(SettingsEdit::Currency("usd".to_string()));
        assert!(settings.validate().is_err());

        let settings = CompanySettings::default().with_edit(SettingsEdit::Currency("EURO".to_string()));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_logo_url() {
        let settings = CompanySettings::default().with_edit(SettingsEdit::LogoUrl("ftp://x/logo.png".to_string()));
        assert!(settings.validate().is_err());

        let settings =
            CompanySettings::default().with_edit(SettingsEdit::LogoUrl("https://cdn.example.com/logo.png".to_string()));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = serde_json::to_value(CompanySettings::default()).unwrap();
        assert_eq!(json["companyName"], "Acme Corporation");
        assert_eq!(json["emailNotifications"], true);
        assert_eq!(json["theme"], "system");
    }

    #[test]
    fn test_theme_parse_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()).unwrap(), theme);
        }
        assert!(Theme::parse("sepia").is_err());
    }
}
