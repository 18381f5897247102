//! Persistence for company settings.
//!
//! The settings screen never writes storage directly: it hands the record
//! to a [`SettingsStore`] picked from configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::config::{AppConfig, SettingsBackend};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::settings::CompanySettings;

/// Where company settings are loaded from and saved to.
#[derive(Debug, Clone)]
pub enum SettingsStore {
    /// TOML file on local disk.
    File(PathBuf),
    /// Settings API speaking JSON (`GET` to load, `PUT` to save).
    Http { client: reqwest::Client, endpoint: String },
    /// `company_settings` table.
    Database(DatabaseConnection),
}

impl SettingsStore {
    /// Build the store named by config.
    ///
    /// Falls back to the file backend when the database backend is
    /// configured but no connection is available.
    pub fn from_config(config: &AppConfig, config_path: &Path, pool: Option<&DatabaseConnection>) -> Result<Self> {
        match config.settings.backend {
            SettingsBackend::File => Ok(Self::File(config.settings_file(config_path))),
            SettingsBackend::Http => Self::http(&config.settings.endpoint),
            SettingsBackend::Database => match pool {
                Some(pool) => Ok(Self::Database(pool.clone())),
                None => {
                    tracing::warn!("Database settings backend unavailable, using local file");
                    Ok(Self::File(config.settings_file(config_path)))
                }
            },
        }
    }

    pub fn http(endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self::Http {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Short description for the UI.
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("file: {}", path.display()),
            Self::Http { endpoint, .. } => format!("api: {endpoint}"),
            Self::Database(_) => "database".to_string(),
        }
    }

    /// Load stored settings. `None` when nothing has been saved yet.
    pub async fn load(&self) -> Result<Option<CompanySettings>> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    return Ok(None);
                }
                let content = tokio::fs::read_to_string(path).await?;
                Ok(Some(toml::from_str(&content)?))
            }
            Self::Http { client, endpoint } => {
                let response = client.get(endpoint).send().await?;
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                let response = check_status(response).await?;
                Ok(Some(response.json().await?))
            }
            Self::Database(pool) => db::settings::load(pool).await,
        }
    }

    /// Validate and persist settings.
    pub async fn save(&self, settings: &CompanySettings) -> Result<()> {
        settings.validate()?;

        match self {
            Self::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    tokio::fs::create_dir_all(parent).await?;
                }
                let content = toml::to_string_pretty(settings)?;
                tokio::fs::write(path, content).await?;
            }
            Self::Http { client, endpoint } => {
                let response = client.put(endpoint).json(settings).send().await?;
                check_status(response).await?;
            }
            Self::Database(pool) => db::settings::save(pool, settings).await?,
        }

        tracing::info!("Company settings saved ({})", self.describe());
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::SettingsApi {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{SettingsEdit, Theme};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("erp-shell-{}-{nanos}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn test_file_store_load_missing_is_none() {
        let store = SettingsStore::File(temp_path("missing.toml"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_save_then_load() {
        let path = temp_path("settings.toml");
        let store = SettingsStore::File(path.clone());
        let settings = CompanySettings::default()
            .with_edit(SettingsEdit::CompanyName("Globex".to_string()))
            .with_edit(SettingsEdit::Theme(Theme::Dark));

        store.save(&settings).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(settings));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_settings() {
        let path = temp_path("invalid.toml");
        let store = SettingsStore::File(path.clone());
        let settings = CompanySettings::default().with_edit(SettingsEdit::CompanyName(String::new()));

        assert!(matches!(store.save(&settings).await, Err(AppError::Validation(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_from_config_database_without_pool_falls_back_to_file() {
        let mut config = AppConfig::default();
        config.settings.backend = SettingsBackend::Database;
        let store = SettingsStore::from_config(&config, Path::new("/tmp/erp/config.toml"), None).unwrap();
        assert!(matches!(store, SettingsStore::File(_)));
    }

    #[test]
    fn test_from_config_http() {
        let mut config = AppConfig::default();
        config.settings.backend = SettingsBackend::Http;
        config.settings.endpoint = "http://localhost:9000/api/settings".to_string();
        let store = SettingsStore::from_config(&config, Path::new("config.toml"), None).unwrap();
        assert_eq!(store.describe(), "api: http://localhost:9000/api/settings");
    }
}
