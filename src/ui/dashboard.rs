//! Dashboard panel with stats, navigation cards, quick actions, and activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CHART_BAR, GEAR, PACKAGE, TRUCK};

use super::app::{App, LogLevel, SupplierForm};
use super::components::dashboard_card;
use crate::models::SupplierStatus;

/// Show the dashboard panel.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<String> {
    let mut next_route = None;

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        ui.label(RichText::new(&app.settings_saved.company_name).size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Enterprise Resource Planning").size(14.0).weak());

        ui.add_space(30.0);

        let active = app
            .suppliers
            .iter()
            .filter(|s| s.status == SupplierStatus::Active)
            .count();

        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 510.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(ui, "Suppliers", &app.suppliers.len().to_string(), "Registered suppliers");
            stat_card(ui, "Active Suppliers", &active.to_string(), "Currently trading");
            stat_card(
                ui,
                "Modules",
                &app.menu.items().len().to_string(),
                "Available in the sidebar",
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 4.0;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_size = egui::vec2(card_width, card_width * 0.75);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "Suppliers", "Manage supplier records", TRUCK, card_size).clicked() {
                next_route = Some("/erp/inventory/suppliers".to_string());
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Inventory", "Stock and purchase orders", PACKAGE, card_size).clicked() {
                next_route = Some("/erp/inventory/levels".to_string());
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Reports", "Business reports", CHART_BAR, card_size).clicked() {
                next_route = Some("/erp/reports".to_string());
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Settings", "Company preferences", GEAR, card_size).clicked() {
                next_route = Some("/erp/admin/settings".to_string());
            }
        });

        ui.add_space(30.0);
    });

    // Two-column layout: Quick Actions | Recent Activity
    let available_width = ui.available_width();
    let column_width = (available_width - 40.0) / 2.0;

    ui.horizontal(|ui| {
        ui.add_space(10.0);

        ui.vertical(|ui| {
            ui.set_width(column_width);

            section_frame(ui, column_width, |ui| {
                ui.label(RichText::new("Quick Actions").strong());
                ui.add_space(10.0);

                if ui.button("Add Supplier").clicked() {
                    app.supplier_form = SupplierForm::open_new();
                    next_route = Some("/erp/inventory/suppliers".to_string());
                }

                ui.add_space(5.0);

                if ui.button("Refresh Suppliers").clicked() {
                    app.load_suppliers();
                }
            });
        });

        ui.add_space(20.0);

        ui.vertical(|ui| {
            ui.set_width(column_width);

            section_frame(ui, column_width, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Recent Activity").strong());
                    if !app.log_messages.is_empty() && ui.small_button("Clear").clicked() {
                        app.log_messages.clear();
                    }
                });
                ui.add_space(10.0);

                ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                    if app.log_messages.is_empty() {
                        ui.label(RichText::new("No recent activity").weak());
                    } else {
                        for entry in app.log_messages.iter().rev().take(10) {
                            let color = match entry.level {
                                LogLevel::Info => Color32::GRAY,
                                LogLevel::Success => Color32::from_rgb(100, 200, 100),
                                LogLevel::Warning => Color32::from_rgb(230, 180, 50),
                                LogLevel::Error => Color32::from_rgb(230, 100, 100),
                            };

                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                        .small()
                                        .color(Color32::DARK_GRAY),
                                );
                                ui.label(RichText::new(&entry.message).color(color));
                            });
                        }
                    }
                });
            });
        });
    });

    next_route
}

fn section_frame(ui: &mut Ui, column_width: f32, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(column_width - 30.0);
            add_contents(ui);
        });
}

/// Render a stat card with title, value, and subtitle.
fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}
