//! Company settings panel.
//!
//! Every field change goes through [`CompanySettings::with_edit`], so the draft
//! is replaced as a whole and the saved copy stays untouched until "Save".

use eframe::egui::{self, RichText};

use super::app::App;
use super::components::{back_button, colors, panel_header};
use crate::models::settings::{CURRENCIES, CompanySettings, SettingsEdit, Theme};

/// Show the settings panel.
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut egui::Ui) -> bool {
    let go_back = back_button(ui);
    panel_header(ui, "Settings");

    let mut edits = Vec::new();

    egui::ScrollArea::vertical().show(ui, |ui| {
        // Company
        ui.group(|ui| {
            ui.heading("Company");
            ui.add_space(5.0);

            egui::Grid::new("company_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Company name:");
                    let mut name = app.settings_draft.company_name.clone();
                    if ui.text_edit_singleline(&mut name).changed() {
                        edits.push(SettingsEdit::CompanyName(name));
                    }
                    ui.end_row();

                    ui.label("Currency:");
                    egui::ComboBox::from_id_salt("settings_currency")
                        .selected_text(app.settings_draft.currency.as_str())
                        .show_ui(ui, |ui| {
                            for currency in CURRENCIES {
                                if ui
                                    .selectable_label(app.settings_draft.currency == currency, currency)
                                    .clicked()
                                {
                                    edits.push(SettingsEdit::Currency(currency.to_string()));
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Logo URL:");
                    let mut logo = app.settings_draft.logo_url.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut logo).hint_text("https://..."))
                        .changed()
                    {
                        edits.push(SettingsEdit::LogoUrl(logo));
                    }
                    ui.end_row();
                });
        });

        ui.add_space(15.0);

        // Preferences
        ui.group(|ui| {
            ui.heading("Preferences");
            ui.add_space(5.0);

            let mut notifications = app.settings_draft.email_notifications;
            if ui.checkbox(&mut notifications, "Email notifications").changed() {
                edits.push(SettingsEdit::ToggleEmailNotifications);
            }

            ui.add_space(8.0);
            ui.label("Theme:");
            ui.horizontal(|ui| {
                for theme in Theme::ALL {
                    if ui
                        .radio(app.settings_draft.theme == theme, theme.label())
                        .clicked()
                    {
                        edits.push(SettingsEdit::Theme(theme));
                    }
                }
            });
        });

        ui.add_space(15.0);

        // Storage
        ui.group(|ui| {
            ui.heading("Storage");
            ui.add_space(5.0);

            egui::Grid::new("storage_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Settings stored in:");
                    ui.label(RichText::new(app.settings_store.describe()).weak());
                    ui.end_row();

                    ui.label("Config file:");
                    ui.label(RichText::new(app.config_path.display().to_string()).weak());
                    ui.end_row();
                });

            if !app.config.database.url.is_empty() {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    if ui.button("Test Database Connection").clicked() {
                        app.test_database_connection();
                    }

                    match &app.database_test_status {
                        Some(Ok(())) => {
                            ui.label(RichText::new("Connected").color(colors::SUCCESS));
                        }
                        Some(Err(e)) => {
                            ui.label(RichText::new(format!("Failed: {e}")).color(colors::ERROR));
                        }
                        None => {}
                    }
                });
            }
        });

        ui.add_space(20.0);

        // Action buttons
        ui.horizontal(|ui| {
            let modified = app.settings_modified();
            let save_btn = egui::Button::new("Save Settings");
            if ui.add_enabled(modified && !app.settings_saving, save_btn).clicked() {
                app.save_settings();
            }

            if app.settings_saving {
                ui.spinner();
            } else if modified {
                ui.label(RichText::new("(unsaved changes)").color(colors::WARNING).italics());
            }

            if ui.button("Reset to Defaults").clicked() {
                app.settings_draft = CompanySettings::default();
            }
        });
    });

    for edit in edits {
        app.settings_draft = app.settings_draft.with_edit(edit);
    }

    go_back
}
