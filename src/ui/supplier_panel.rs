//! Supplier management panel with add, view, edit, delete, search and export.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, EYE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, SupplierForm};
use super::components::{
    action_button, back_button, badge, colors, danger_action_button, panel_header, primary_button_with_icon,
    styled_button_with_icon,
};
use crate::models::SupplierStatus;

/// Show the supplier panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let go_back = back_button(ui);

    panel_header(ui, "Suppliers");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Supplier").clicked() {
            app.supplier_form = SupplierForm::open_new();
        }

        ui.add_space(10.0);

        if app.is_online() && styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_suppliers();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_suppliers();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.supplier_search)
                .desired_width(200.0)
                .hint_text("Name, email or contact..."),
        );

        ui.add_space(20.0);

        ui.label("Status:");
        if ui
            .selectable_label(app.supplier_status_filter.is_none(), "All")
            .clicked()
        {
            app.supplier_status_filter = None;
        }
        for status in SupplierStatus::ALL {
            if ui
                .selectable_label(app.supplier_status_filter == Some(status), status.as_str())
                .clicked()
            {
                app.supplier_status_filter = Some(status);
            }
        }

        if !app.supplier_search.is_empty() || app.supplier_status_filter.is_some() {
            ui.add_space(10.0);
            if ui.button("Clear").clicked() {
                app.supplier_search.clear();
                app.supplier_status_filter = None;
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.supplier_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    if app.viewing_supplier.is_some() {
        show_view_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered: Vec<_> = app
        .suppliers
        .filtered(&app.supplier_search, app.supplier_status_filter)
        .cloned()
        .collect();

    ui.label(format!(
        "Showing {} of {} suppliers",
        filtered.len(),
        app.suppliers.len()
    ));

    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("supplier_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("suppliers_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Name");
                ui.strong("Contact");
                ui.strong("Email");
                ui.strong("Address");
                ui.strong("Status");
                ui.strong("Actions");
                ui.end_row();

                for supplier in &filtered {
                    ui.label(&supplier.name);
                    ui.label(if supplier.contact.is_empty() { "-" } else { supplier.contact.as_str() });
                    ui.label(&supplier.email);
                    ui.label(if supplier.address.is_empty() { "-" } else { supplier.address.as_str() });

                    let fill = match supplier.status {
                        SupplierStatus::Active => colors::SUCCESS,
                        SupplierStatus::Inactive => colors::NEUTRAL,
                    };
                    badge(ui, supplier.status.as_str(), fill);

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, EYE, "View").clicked() {
                            app.viewing_supplier = Some(supplier.id);
                        }
                        ui.add_space(4.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.supplier_form = SupplierForm::edit(supplier);
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.delete_target = Some(DeleteTarget {
                                id: supplier.id,
                                name: supplier.name.clone(),
                            });
                            app.show_delete_confirm = true;
                        }
                    });

                    ui.end_row();
                }
            });

        if filtered.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.weak("No suppliers match the current filters.");
            });
        }
    });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.supplier_form.is_editing {
        "Edit Supplier"
    } else {
        "Add Supplier"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("supplier_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add(egui::TextEdit::singleline(&mut app.supplier_form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Contact:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.supplier_form.contact)
                            .desired_width(200.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.supplier_form.email)
                            .desired_width(250.0)
                            .hint_text("name@company.com"),
                    );
                    ui.end_row();

                    ui.label("Address:");
                    ui.add(egui::TextEdit::multiline(&mut app.supplier_form.address).desired_rows(2));
                    ui.end_row();

                    ui.label("Status:");
                    egui::ComboBox::from_id_salt("supplier_form_status")
                        .width(150.0)
                        .selected_text(app.supplier_form.status.as_str())
                        .show_ui(ui, |ui| {
                            for status in SupplierStatus::ALL {
                                ui.selectable_value(&mut app.supplier_form.status, status, status.as_str());
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.supplier_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        save_supplier(app);
                    }
                });
            });
        });
}

fn show_view_dialog(app: &mut App, ctx: &egui::Context) {
    let Some(supplier) = app.viewing_supplier.and_then(|id| app.suppliers.get(id)).cloned() else {
        app.viewing_supplier = None;
        return;
    };

    let mut open = true;
    egui::Window::new(format!("Supplier #{}", supplier.id))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("supplier_view_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    for (label, value) in [
                        ("Name:", supplier.name.as_str()),
                        ("Contact:", supplier.contact.as_str()),
                        ("Email:", supplier.email.as_str()),
                        ("Address:", supplier.address.as_str()),
                        ("Status:", supplier.status.as_str()),
                    ] {
                        ui.label(label);
                        ui.label(if value.is_empty() { "-" } else { value });
                        ui.end_row();
                    }
                });

            ui.add_space(10.0);
            if ui.button("Edit").clicked() {
                app.supplier_form = SupplierForm::edit(&supplier);
                app.viewing_supplier = None;
            }
        });

    if !open {
        app.viewing_supplier = None;
    }
}

fn save_supplier(app: &mut App) {
    let data = app.supplier_form.to_create();

    match app.supplier_form.id.filter(|_| app.supplier_form.is_editing) {
        Some(id) => app.update_supplier(id, data),
        None => app.create_supplier(data),
    }
}
