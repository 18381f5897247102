//! Landing screen: navbar, hero, features, testimonials, call to action.

use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::{CHART_LINE_UP, PACKAGE, QUOTES, SHIELD_CHECK, USERS_THREE, WALLET};

use super::components::{colors, primary_button_with_icon};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Landing sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navbar,
    Hero,
    Features,
    Testimonials,
    CallToAction,
}

/// Static copy for the landing screen.
pub struct LandingContent {
    pub brand: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub cta_title: &'static str,
    pub cta_text: &'static str,
}

impl LandingContent {
    pub const SECTIONS: [Section; 5] = [
        Section::Navbar,
        Section::Hero,
        Section::Features,
        Section::Testimonials,
        Section::CallToAction,
    ];
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            brand: "ERP Shell",
            headline: "Run your whole business from one place",
            subheadline: "Inventory, accounting, people and customers in a single desktop workspace.",
            features: vec![
                Feature {
                    icon: PACKAGE,
                    title: "Inventory",
                    description: "Track stock levels, suppliers and purchase orders.",
                },
                Feature {
                    icon: WALLET,
                    title: "Accounting",
                    description: "Invoices, payments and expenses kept in sync.",
                },
                Feature {
                    icon: USERS_THREE,
                    title: "Human Resources",
                    description: "Employees, payroll and leave in one record.",
                },
                Feature {
                    icon: CHART_LINE_UP,
                    title: "Reports",
                    description: "See how every department is performing.",
                },
                Feature {
                    icon: SHIELD_CHECK,
                    title: "Administration",
                    description: "Users, roles and company-wide settings.",
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "We replaced three spreadsheets and a shared inbox in a week.",
                    author: "Priya N.",
                    role: "Operations Manager",
                },
                Testimonial {
                    quote: "Supplier onboarding went from days to minutes.",
                    author: "Marco T.",
                    role: "Procurement Lead",
                },
            ],
            cta_title: "Ready to get started?",
            cta_text: "Open the workspace and add your first supplier.",
        }
    }
}

/// Show the landing screen.
///
/// Returns the route to navigate to, if any.
pub fn show(content: &LandingContent, ui: &mut Ui) -> Option<String> {
    let mut route = None;

    egui::ScrollArea::vertical().id_salt("landing_scroll").show(ui, |ui| {
        for section in LandingContent::SECTIONS {
            let next = match section {
                Section::Navbar => show_navbar(content, ui),
                Section::Hero => show_hero(content, ui),
                Section::Features => {
                    show_features(content, ui);
                    None
                }
                Section::Testimonials => {
                    show_testimonials(content, ui);
                    None
                }
                Section::CallToAction => show_call_to_action(content, ui),
            };
            if next.is_some() {
                route = next;
            }
        }
    });

    route
}

fn show_navbar(content: &LandingContent, ui: &mut Ui) -> Option<String> {
    let mut route = None;
    ui.horizontal(|ui| {
        ui.label(RichText::new(content.brand).size(20.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Settings").clicked() {
                route = Some("/admin/settings".to_string());
            }
            if ui.button("Suppliers").clicked() {
                route = Some("/admin/suppliers".to_string());
            }
            if ui.button("Open ERP").clicked() {
                route = Some("/erp/dashboard".to_string());
            }
        });
    });
    ui.separator();
    route
}

fn show_hero(content: &LandingContent, ui: &mut Ui) -> Option<String> {
    let mut route = None;
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new(content.headline).size(36.0).strong());
        ui.add_space(10.0);
        ui.label(RichText::new(content.subheadline).size(16.0).weak());
        ui.add_space(25.0);
        if primary_button_with_icon(ui, "", "Get Started").clicked() {
            route = Some("/erp/dashboard".to_string());
        }
        ui.add_space(60.0);
    });
    route
}

fn show_features(content: &LandingContent, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Everything in one workspace").size(24.0).strong());
    });
    ui.add_space(20.0);

    let columns = 3;
    egui::Grid::new("landing_features")
        .num_columns(columns)
        .spacing([20.0, 20.0])
        .show(ui, |ui| {
            for (idx, feature) in content.features.iter().enumerate() {
                card(ui, |ui| {
                    ui.label(RichText::new(feature.icon).size(28.0).color(colors::ACCENT));
                    ui.label(RichText::new(feature.title).strong());
                    ui.label(RichText::new(feature.description).weak());
                });
                if (idx + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(40.0);
}

fn show_testimonials(content: &LandingContent, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("What our customers say").size(24.0).strong());
    });
    ui.add_space(20.0);

    ui.horizontal_wrapped(|ui| {
        for testimonial in &content.testimonials {
            card(ui, |ui| {
                ui.label(RichText::new(QUOTES).size(20.0).weak());
                ui.label(RichText::new(testimonial.quote).italics());
                ui.add_space(6.0);
                ui.label(RichText::new(format!("{}, {}", testimonial.author, testimonial.role)).small());
            });
        }
    });
    ui.add_space(40.0);
}

fn show_call_to_action(content: &LandingContent, ui: &mut Ui) -> Option<String> {
    let mut route = None;
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(content.cta_title).size(24.0).strong());
        ui.add_space(6.0);
        ui.label(content.cta_text);
        ui.add_space(15.0);
        if primary_button_with_icon(ui, "", "Open ERP").clicked() {
            route = Some("/erp/dashboard".to_string());
        }
        ui.add_space(40.0);
    });
    route
}

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(220.0);
            ui.vertical(add_contents);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_order() {
        assert_eq!(LandingContent::SECTIONS.first(), Some(&Section::Navbar));
        assert_eq!(LandingContent::SECTIONS.last(), Some(&Section::CallToAction));
    }

    #[test]
    fn test_default_content_is_populated() {
        let content = LandingContent::default();
        assert_eq!(content.features.len(), 5);
        assert!(content.testimonials.iter().all(|t| !t.quote.is_empty()));
    }
}
