//! Company settings repository (single row).

use crate::entities::{company_settings, prelude::*};
use crate::error::Result;
use crate::models::settings::{CompanySettings as Settings, Theme};
use sea_orm::*;

const SETTINGS_ROW_ID: i32 = 1;

/// Load the stored settings, if any.
pub async fn load(db: &DatabaseConnection) -> Result<Option<Settings>> {
    let Some(row) = CompanySettings::find_by_id(SETTINGS_ROW_ID).one(db).await? else {
        return Ok(None);
    };

    Ok(Some(Settings {
        theme: Theme::parse(&row.theme)?,
        company_name: row.company_name,
        currency: row.currency,
        logo_url: row.logo_url,
        email_notifications: row.email_notifications,
    }))
}

/// Insert or replace the settings row.
pub async fn save(db: &DatabaseConnection, settings: &Settings) -> Result<()> {
    let model = company_settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        company_name: Set(settings.company_name.clone()),
        currency: Set(settings.currency.clone()),
        logo_url: Set(settings.logo_url.clone()),
        email_notifications: Set(settings.email_notifications),
        theme: Set(settings.theme.as_str().to_string()),
        updated_at: Set(chrono::Utc::now()),
    };

    CompanySettings::insert(model)
        .on_conflict(
            sea_query::OnConflict::column(company_settings::Column::Id)
                .update_columns([
                    company_settings::Column::CompanyName,
                    company_settings::Column::Currency,
                    company_settings::Column::LogoUrl,
                    company_settings::Column::EmailNotifications,
                    company_settings::Column::Theme,
                    company_settings::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}
