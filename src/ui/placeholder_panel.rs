//! Placeholder for ERP modules without a screen yet.

use eframe::egui::{RichText, Ui};

use super::components::{back_button, panel_header};

/// Show a "coming soon" panel titled after the menu entry.
///
/// Returns `true` if the back button was clicked.
pub fn show(ui: &mut Ui, title: &str) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, title);

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Coming soon").size(18.0).weak());
        ui.add_space(10.0);
        ui.label(format!("{title} functionality will be implemented here."));
    });

    go_back
}
