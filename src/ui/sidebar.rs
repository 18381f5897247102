//! Sidebar rendering for the ERP shell.

use std::collections::HashSet;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{CARET_DOWN, CARET_RIGHT};

use crate::menu::{Menu, MenuRow};

use super::components::{badge, colors};

/// What the user did in the sidebar this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    Navigate(String),
    Toggle(String),
}

/// Draw the menu rows. Groups are expanded when their url is in `expanded`.
pub fn show(ui: &mut Ui, menu: &Menu, expanded: &HashSet<String>) -> Option<SidebarAction> {
    let mut action = None;

    egui::ScrollArea::vertical().id_salt("sidebar_scroll").show(ui, |ui| {
        for row in menu.rows(expanded) {
            if let Some(a) = show_row(ui, &row) {
                action = Some(a);
            }
        }
    });

    action
}

fn show_row(ui: &mut Ui, row: &MenuRow<'_>) -> Option<SidebarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.add_space(row.depth as f32 * 16.0);

        if row.has_children {
            let caret = if row.expanded { CARET_DOWN } else { CARET_RIGHT };
            if ui.add(egui::Button::new(caret).frame(false)).clicked() {
                action = Some(SidebarAction::Toggle(row.url.to_string()));
            }
        } else {
            ui.add_space(18.0);
        }

        let mut title = RichText::new(row.title);
        if row.depth == 0 {
            title = title.strong();
        }
        if ui.selectable_label(row.is_active, title).clicked() {
            action = Some(SidebarAction::Navigate(row.url.to_string()));
        }

        if let Some(text) = row.badge {
            badge(ui, text, colors::ACCENT);
        }
    });

    action
}
