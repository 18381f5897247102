//! Navigation menu model for the ERP sidebar.
//!
//! A [`Menu`] is built once at startup and handed to the shell. It is never
//! mutated in place: highlighting a different route produces a new value.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu construction errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("Menu entry at {path} has an empty title")]
    EmptyTitle { path: String },

    #[error("Menu entry '{title}' has an empty url")]
    EmptyUrl { title: String },

    #[error("Duplicate url '{url}' among sibling menu entries")]
    DuplicateUrl { url: String },

    #[error("Failed to parse menu file: {0}")]
    Parse(String),
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            is_active: false,
            badge: None,
            sub_items: Vec::new(),
        }
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn children(mut self, sub_items: Vec<MenuItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// Returns a copy flagged active when it or a descendant matches `url`.
    fn activated(&self, url: &str) -> Self {
        let sub_items: Vec<MenuItem> = self.sub_items.iter().map(|c| c.activated(url)).collect();
        let is_active = self.url == url || sub_items.iter().any(|c| c.is_active);
        Self {
            title: self.title.clone(),
            url: self.url.clone(),
            is_active,
            badge: self.badge.clone(),
            sub_items,
        }
    }
}

/// One rendered sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow<'a> {
    pub depth: usize,
    pub title: &'a str,
    pub url: &'a str,
    pub badge: Option<&'a str>,
    pub is_active: bool,
    pub has_children: bool,
    pub expanded: bool,
}

/// Validated, ordered navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu, rejecting empty titles, empty urls and duplicate sibling urls.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        validate_level(&items, "root")?;
        Ok(Self { items })
    }

    /// Parse a menu from TOML (`[[items]]` tables, nested `[[items.sub_items]]`).
    pub fn from_toml_str(content: &str) -> Result<Self, MenuError> {
        let file: MenuFile = toml::from_str(content).map_err(|e| MenuError::Parse(e.to_string()))?;
        Self::new(file.items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Depth-first traversal in display order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        let mut stack: Vec<&MenuItem> = self.items.iter().rev().collect();
        std::iter::from_fn(move || {
            let item = stack.pop()?;
            stack.extend(item.sub_items.iter().rev());
            Some(item)
        })
    }

    /// Find the first entry with the given url.
    pub fn find(&self, url: &str) -> Option<&MenuItem> {
        self.iter().find(|item| item.url == url)
    }

    /// Copy of this menu with `url` (and its ancestors) marked active.
    pub fn with_active_route(&self, url: &str) -> Self {
        Self {
            items: self.items.iter().map(|item| item.activated(url)).collect(),
        }
    }

    /// Flatten into display rows. Children appear only under expanded groups.
    pub fn rows(&self, expanded: &HashSet<String>) -> Vec<MenuRow<'_>> {
        let mut rows = Vec::new();
        push_rows(&self.items, 0, expanded, &mut rows);
        rows
    }
}

fn push_rows<'a>(items: &'a [MenuItem], depth: usize, expanded: &HashSet<String>, rows: &mut Vec<MenuRow<'a>>) {
    for item in items {
        let is_expanded = item.has_children() && expanded.contains(&item.url);
        rows.push(MenuRow {
            depth,
            title: &item.title,
            url: &item.url,
            badge: item.badge.as_deref(),
            is_active: item.is_active,
            has_children: item.has_children(),
            expanded: is_expanded,
        });
        if is_expanded {
            push_rows(&item.sub_items, depth + 1, expanded, rows);
        }
    }
}

fn validate_level(items: &[MenuItem], path: &str) -> Result<(), MenuError> {
    let mut seen = HashSet::new();
    for (idx, item) in items.iter().enumerate() {
        if item.title.trim().is_empty() {
            return Err(MenuError::EmptyTitle {
                path: format!("{path}[{idx}]"),
            });
        }
        if item.url.trim().is_empty() {
            return Err(MenuError::EmptyUrl {
                title: item.title.clone(),
            });
        }
        if !seen.insert(item.url.as_str()) {
            return Err(MenuError::DuplicateUrl { url: item.url.clone() });
        }
        validate_level(&item.sub_items, &item.url)?;
    }
    Ok(())
}

/// The built-in ERP navigation tree.
pub fn default_erp_menu() -> Menu {
    let items = vec![
        MenuItem::new("Dashboard", "/erp/dashboard"),
        MenuItem::new("Inventory", "/erp/inventory").badge("3").children(vec![
            MenuItem::new("Stock Levels", "/erp/inventory/levels"),
            MenuItem::new("Suppliers", "/erp/inventory/suppliers"),
            MenuItem::new("Purchase Orders", "/erp/inventory/orders"),
        ]),
        MenuItem::new("Accounting", "/erp/accounting").children(vec![
            MenuItem::new("Invoices", "/erp/accounting/invoices").badge("5"),
            MenuItem::new("Payments", "/erp/accounting/payments"),
            MenuItem::new("Expenses", "/erp/accounting/expenses"),
        ]),
        MenuItem::new("Human Resources", "/erp/hr").children(vec![
            MenuItem::new("Employees", "/erp/hr/employees"),
            MenuItem::new("Payroll", "/erp/hr/payroll"),
            MenuItem::new("Leave Management", "/erp/hr/leave").badge("2"),
        ]),
        MenuItem::new("CRM", "/erp/crm").badge("New").children(vec![
            MenuItem::new("Clients", "/erp/crm/clients"),
            MenuItem::new("Leads", "/erp/crm/leads"),
            MenuItem::new("Contracts", "/erp/crm/contracts"),
        ]),
        MenuItem::new("Reports", "/erp/reports"),
        MenuItem::new("Administration", "/erp/admin").children(vec![
            MenuItem::new("Users", "/erp/admin/users"),
            MenuItem::new("Roles", "/erp/admin/roles"),
            MenuItem::new("Settings", "/erp/admin/settings"),
        ]),
    ];

    // Static entries are unique and non-empty.
    Menu { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(urls: &[&str]) -> HashSet<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_default_menu_is_valid() {
        let menu = default_erp_menu();
        assert_eq!(Menu::new(menu.items().to_vec()).as_ref(), Ok(&menu));
        assert_eq!(menu.items().len(), 7);
    }

    #[test]
    fn test_rows_preserve_order_collapsed() {
        let menu = default_erp_menu();
        let titles: Vec<_> = menu.rows(&HashSet::new()).iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec![
                "Dashboard",
                "Inventory",
                "Accounting",
                "Human Resources",
                "CRM",
                "Reports",
                "Administration"
            ]
        );
    }

    #[test]
    fn test_rows_nest_children_one_level_under_parent() {
        let menu = default_erp_menu();
        let rows = menu.rows(&expanded(&["/erp/inventory"]));

        let urls: Vec<_> = rows.iter().map(|r| (r.depth, r.url)).collect();
        assert_eq!(
            &urls[..5],
            &[
                (0, "/erp/dashboard"),
                (0, "/erp/inventory"),
                (1, "/erp/inventory/levels"),
                (1, "/erp/inventory/suppliers"),
                (1, "/erp/inventory/orders"),
            ]
        );
        assert_eq!(urls[5], (0, "/erp/accounting"));
        assert!(rows[1].expanded);
        assert!(!rows[5].expanded);
    }

    #[test]
    fn test_rows_carry_badges() {
        let menu = default_erp_menu();
        let rows = menu.rows(&HashSet::new());
        assert_eq!(rows[0].badge, None);
        assert_eq!(rows[1].badge, Some("3"));
        assert_eq!(rows[4].badge, Some("New"));
    }

    #[test]
    fn test_expanding_leaf_has_no_effect() {
        let menu = default_erp_menu();
        let rows = menu.rows(&expanded(&["/erp/dashboard"]));
        assert!(!rows[0].expanded);
        assert_eq!(rows.len(), 7);
    }

    #[test]
    fn test_with_active_route_marks_item_and_parent() {
        let menu = default_erp_menu().with_active_route("/erp/inventory/suppliers");

        let active: Vec<_> = menu.iter().filter(|i| i.is_active).map(|i| i.url.as_str()).collect();
        assert_eq!(active, vec!["/erp/inventory", "/erp/inventory/suppliers"]);
    }

    #[test]
    fn test_with_active_route_clears_previous() {
        let menu = default_erp_menu()
            .with_active_route("/erp/reports")
            .with_active_route("/erp/dashboard");

        let active: Vec<_> = menu.iter().filter(|i| i.is_active).map(|i| i.url.as_str()).collect();
        assert_eq!(active, vec!["/erp/dashboard"]);
    }

    #[test]
    fn test_unknown_route_clears_all() {
        let menu = default_erp_menu().with_active_route("/nowhere");
        assert!(menu.iter().all(|i| !i.is_active));
    }

    #[test]
    fn test_find() {
        let menu = default_erp_menu();
        assert_eq!(menu.find("/erp/hr/payroll").map(|i| i.title.as_str()), Some("Payroll"));
        assert!(menu.find("/admin/suppliers").is_none());
    }

    #[test]
    fn test_iter_is_depth_first() {
        let menu = Menu::new(vec![
            MenuItem::new("A", "/a").children(vec![MenuItem::new("A1", "/a/1"), MenuItem::new("A2", "/a/2")]),
            MenuItem::new("B", "/b"),
        ])
        .unwrap();
        let urls: Vec<_> = menu.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["/a", "/a/1", "/a/2", "/b"]);
    }

    #[test]
    fn test_rejects_empty_title() {
        let err = Menu::new(vec![MenuItem::new("  ", "/a")]).unwrap_err();
        assert!(matches!(err, MenuError::EmptyTitle { .. }));
    }

    #[test]
    fn test_rejects_empty_url_in_children() {
        let err = Menu::new(vec![MenuItem::new("A", "/a").children(vec![MenuItem::new("A1", "")])]).unwrap_err();
        assert_eq!(err, MenuError::EmptyUrl { title: "A1".to_string() });
    }

    #[test]
    fn test_rejects_duplicate_sibling_urls() {
        let err = Menu::new(vec![MenuItem::new("A", "/a"), MenuItem::new("B", "/a")]).unwrap_err();
        assert_eq!(err, MenuError::DuplicateUrl { url: "/a".to_string() });
    }

    #[test]
    fn test_same_url_at_different_levels_is_allowed() {
        let menu = Menu::new(vec![
            MenuItem::new("A", "/a").children(vec![MenuItem::new("Overview", "/a")]),
        ]);
        assert!(menu.is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let menu = Menu::from_toml_str(
            r#"
            [[items]]
            title = "Dashboard"
            url = "/erp/dashboard"

            [[items]]
            title = "Sales"
            url = "/erp/sales"
            badge = "7"

            [[items.sub_items]]
            title = "Quotes"
            url = "/erp/sales/quotes"
            "#,
        )
        .unwrap();

        assert_eq!(menu.items().len(), 2);
        assert_eq!(menu.items()[1].badge.as_deref(), Some("7"));
        assert_eq!(menu.items()[1].sub_items[0].title, "Quotes");
    }

    #[test]
    fn test_from_toml_str_rejects_invalid_entries() {
        let err = Menu::from_toml_str(
            r#"
            [[items]]
            title = ""
            url = "/x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::EmptyTitle { .. }));
    }
}
