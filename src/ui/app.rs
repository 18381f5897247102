//! Main application UI.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout, RichText};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::db;
use crate::error::{AppError, Result};
use crate::menu::Menu;
use crate::models::settings::{CompanySettings, Theme};
use crate::models::supplier::{CreateSupplier, Supplier, SupplierStatus, UpdateSupplier};
use crate::settings_store::SettingsStore;
use crate::supplier_book::SupplierBook;

use super::components::colors;
use super::landing::{self, LandingContent};
use super::{dashboard, placeholder_panel, settings_panel, sidebar, supplier_panel};

/// Screen shown in the content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Landing,
    Dashboard,
    Suppliers,
    Settings,
    /// Route with no dedicated screen yet.
    Placeholder(String),
}

impl Panel {
    /// Map a route path to the screen that renders it.
    pub fn from_route(route: &str) -> Self {
        match route.trim_end_matches('/') {
            "" => Panel::Landing,
            "/erp" | "/erp/dashboard" => Panel::Dashboard,
            "/admin/suppliers" | "/erp/inventory/suppliers" => Panel::Suppliers,
            "/admin/settings" | "/erp/admin/settings" => Panel::Settings,
            other => Panel::Placeholder(other.to_string()),
        }
    }

    /// Get the display name for the panel.
    pub fn name(&self) -> &str {
        match self {
            Panel::Landing => "Home",
            Panel::Dashboard => "Dashboard",
            Panel::Suppliers => "Suppliers",
            Panel::Settings => "Settings",
            Panel::Placeholder(route) => route,
        }
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    // Data loading
    SuppliersLoaded(Vec<Supplier>),
    SettingsLoaded(Option<CompanySettings>),
    LoadError(String),

    // CRUD operations
    SupplierSaved(Supplier),
    SupplierDeleted(i32),
    SettingsSaved(CompanySettings),
    OperationFailed(String),

    // Connection tests
    DatabaseTestResult(std::result::Result<(), String>),
}

/// Form state for supplier add/edit.
#[derive(Default, Clone)]
pub struct SupplierForm {
    pub id: Option<i32>,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub status: SupplierStatus,
    pub is_open: bool,
    pub is_editing: bool,
}

impl SupplierForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Empty form opened for adding.
    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    /// Create a form pre-filled for editing an existing supplier.
    pub fn edit(supplier: &Supplier) -> Self {
        Self {
            id: Some(supplier.id),
            name: supplier.name.clone(),
            contact: supplier.contact.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
            status: supplier.status,
            is_open: true,
            is_editing: true,
        }
    }

    /// Form values as a create DTO (not yet validated).
    pub fn to_create(&self) -> CreateSupplier {
        CreateSupplier {
            name: self.name.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            status: self.status,
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub struct DeleteTarget {
    pub id: i32,
    pub name: String,
}

/// Main application state.
pub struct App {
    // Runtime and database
    pub rt: tokio::runtime::Runtime,
    pub pool: Option<DatabaseConnection>,
    pub database_error: Option<String>,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub route: String,
    pub current_panel: Panel,
    base_menu: Menu,
    pub menu: Menu,
    pub expanded: HashSet<String>,

    // Suppliers
    pub suppliers: SupplierBook,
    pub supplier_form: SupplierForm,
    pub supplier_search: String,
    pub supplier_status_filter: Option<SupplierStatus>,
    pub viewing_supplier: Option<i32>,

    // Settings
    pub settings_saved: CompanySettings,
    pub settings_draft: CompanySettings,
    pub settings_store: SettingsStore,
    pub settings_saving: bool,
    applied_theme: Option<Theme>,
    pub database_test_status: Option<std::result::Result<(), String>>,

    // Landing content
    pub landing: LandingContent,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
    pub config_path: PathBuf,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(
        rt: tokio::runtime::Runtime,
        pool: Option<DatabaseConnection>,
        database_error: Option<String>,
        config: AppConfig,
        config_path: PathBuf,
        menu: Menu,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let settings_store = SettingsStore::from_config(&config, &config_path, pool.as_ref()).unwrap_or_else(|e| {
            tracing::error!("Settings store unavailable ({}), using local file", e);
            SettingsStore::File(config.settings_file(&config_path))
        });

        let suppliers = if pool.is_some() {
            SupplierBook::new()
        } else {
            SupplierBook::sample()
        };

        let start_route = config.ui.start_route.clone();

        let mut app = Self {
            rt,
            pool,
            database_error,
            tx,
            rx,
            route: String::new(),
            current_panel: Panel::Landing,
            menu: menu.clone(),
            base_menu: menu,
            expanded: HashSet::new(),
            suppliers,
            supplier_form: SupplierForm::default(),
            supplier_search: String::new(),
            supplier_status_filter: None,
            viewing_supplier: None,
            settings_saved: CompanySettings::default(),
            settings_draft: CompanySettings::default(),
            settings_store,
            settings_saving: false,
            applied_theme: None,
            database_test_status: None,
            landing: LandingContent::default(),
            log_messages: Vec::new(),
            config,
            config_path,
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
        };

        if let Some(e) = app.database_error.clone() {
            app.log_warning(format!("Offline mode: {e}"));
        }

        app.navigate(&start_route);
        app.load_suppliers();
        app.load_settings();

        app
    }

    pub fn is_online(&self) -> bool {
        self.pool.is_some()
    }

    /// Switch to `route` and highlight it in the sidebar.
    pub fn navigate(&mut self, route: &str) {
        tracing::debug!("Navigate to {}", route);
        self.route = route.to_string();
        self.current_panel = Panel::from_route(route);
        self.menu = self.base_menu.with_active_route(route);

        // Keep the group holding the active entry open.
        for item in self.menu.items() {
            if item.has_children() && item.is_active {
                self.expanded.insert(item.url.clone());
            }
        }
    }

    /// Expand or collapse a sidebar group.
    pub fn toggle_group(&mut self, url: &str) {
        if !self.expanded.remove(url) {
            self.expanded.insert(url.to_string());
        }
    }

    /// Title for the current route, from the menu when it has one.
    pub fn route_title(&self) -> String {
        self.menu
            .find(&self.route)
            .map(|item| item.title.clone())
            .unwrap_or_else(|| self.current_panel.name().to_string())
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Load suppliers from database. Offline, the in-memory book is kept.
    pub fn load_suppliers(&mut self) {
        let Some(pool) = self.pool.clone() else {
            return;
        };
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result: Result<Vec<Supplier>> = async {
                db::supplier::list_all(&pool)
                    .await?
                    .into_iter()
                    .map(Supplier::try_from)
                    .collect()
            }
            .await;

            let _ = match result {
                Ok(suppliers) => tx.send(UiMessage::SuppliersLoaded(suppliers)),
                Err(e) => tx.send(UiMessage::LoadError(e.to_string())),
            };
        });
    }

    /// Load stored company settings.
    pub fn load_settings(&mut self) {
        let store = self.settings_store.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let _ = match store.load().await {
                Ok(settings) => tx.send(UiMessage::SettingsLoaded(settings)),
                Err(e) => tx.send(UiMessage::LoadError(format!("Failed to load settings: {e}"))),
            };
        });
    }

    /// Validate and create a new supplier.
    pub fn create_supplier(&mut self, data: CreateSupplier) {
        let data = match data.validate() {
            Ok(data) => data,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        let Some(pool) = self.pool.clone() else {
            if self.suppliers.email_exists(&data.email, None) {
                self.error_message = Some(format!("Email {} is already registered", data.email));
                return;
            }
            let name = self.suppliers.add(data).name.clone();
            self.supplier_form.reset();
            self.success_message = Some(format!("Supplier '{name}' added"));
            self.log_success(format!("Supplier added: {name}"));
            return;
        };
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result: Result<Supplier> = async {
                if db::supplier::email_exists(&pool, &data.email, None).await? {
                    return Err(AppError::validation(format!("Email {} is already registered", data.email)));
                }
                db::supplier::create(&pool, data).await?.try_into()
            }
            .await;

            let _ = match result {
                Ok(supplier) => tx.send(UiMessage::SupplierSaved(supplier)),
                Err(e) => tx.send(UiMessage::OperationFailed(e.to_string())),
            };
        });
    }

    /// Validate and update an existing supplier.
    pub fn update_supplier(&mut self, id: i32, data: CreateSupplier) {
        let data = match data.validate() {
            Ok(data) => data,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        let Some(pool) = self.pool.clone() else {
            if self.suppliers.email_exists(&data.email, Some(id)) {
                self.error_message = Some(format!("Email {} is already registered", data.email));
                return;
            }
            match self.suppliers.update(id, data.into()) {
                Ok(supplier) => {
                    let name = supplier.name.clone();
                    self.supplier_form.reset();
                    self.success_message = Some(format!("Supplier '{name}' saved"));
                    self.log_success(format!("Supplier updated: {name}"));
                }
                Err(e) => self.error_message = Some(e.to_string()),
            }
            return;
        };
        let tx = self.tx.clone();
        let update: UpdateSupplier = data.into();

        self.rt.spawn(async move {
            let result: Result<Supplier> = async {
                if let Some(email) = &update.email
                    && db::supplier::email_exists(&pool, email, Some(id)).await?
                {
                    return Err(AppError::validation(format!("Email {email} is already registered")));
                }
                match db::supplier::update(&pool, id, update).await? {
                    Some(model) => model.try_into(),
                    None => Err(AppError::not_found("Supplier not found")),
                }
            }
            .await;

            let _ = match result {
                Ok(supplier) => tx.send(UiMessage::SupplierSaved(supplier)),
                Err(e) => tx.send(UiMessage::OperationFailed(e.to_string())),
            };
        });
    }

    /// Delete a supplier.
    pub fn delete_supplier(&mut self, id: i32) {
        let Some(pool) = self.pool.clone() else {
            self.apply_supplier_deleted(id);
            return;
        };
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let _ = match db::supplier::delete(&pool, id).await {
                Ok(true) => tx.send(UiMessage::SupplierDeleted(id)),
                Ok(false) => tx.send(UiMessage::OperationFailed("Supplier not found".to_string())),
                Err(e) => tx.send(UiMessage::OperationFailed(e.to_string())),
            };
        });
    }

    fn apply_supplier_deleted(&mut self, id: i32) {
        if self.viewing_supplier == Some(id) {
            self.viewing_supplier = None;
        }
        match self.suppliers.remove(id) {
            Some(removed) => {
                self.success_message = Some("Supplier deleted".to_string());
                self.log_success(format!("Supplier deleted: {}", removed.name));
            }
            None => self.log_warning(format!("Supplier {id} was already removed")),
        }
    }

    /// Export the suppliers visible in the table to Excel.
    pub fn export_suppliers(&mut self) {
        let default_name = crate::export::generate_export_filename("suppliers");
        let Some(path) = crate::export::show_save_dialog(&default_name) else {
            return;
        };

        let rows = self
            .suppliers
            .filtered(&self.supplier_search, self.supplier_status_filter);
        match crate::export::export_suppliers_to_excel(rows, &path) {
            Ok(count) => {
                self.success_message = Some(format!("Exported {} suppliers to: {}", count, path.display()));
                self.log_success(format!("Exported suppliers: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Persist the settings draft through the settings store.
    pub fn save_settings(&mut self) {
        if let Err(e) = self.settings_draft.validate() {
            self.error_message = Some(e.to_string());
            return;
        }

        self.settings_saving = true;
        let store = self.settings_store.clone();
        let settings = self.settings_draft.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let _ = match store.save(&settings).await {
                Ok(()) => tx.send(UiMessage::SettingsSaved(settings)),
                Err(e) => tx.send(UiMessage::OperationFailed(format!("Failed to save settings: {e}"))),
            };
        });
    }

    pub fn settings_modified(&self) -> bool {
        self.settings_draft != self.settings_saved
    }

    /// Test the configured database connection.
    pub fn test_database_connection(&mut self) {
        self.log_info("Testing database connection...");
        self.database_test_status = None;

        let config = self.config.database.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result = db::connection::test_connection_config(&config).await;
            let _ = tx.send(UiMessage::DatabaseTestResult(result));
        });
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::SuppliersLoaded(suppliers) => {
                    self.log_info(format!("Loaded {} suppliers", suppliers.len()));
                    self.suppliers.replace_all(suppliers);
                }
                UiMessage::SettingsLoaded(Some(settings)) => {
                    // Unsaved edits in the form win over a late load.
                    if self.settings_modified() {
                        self.log_warning("Stored settings loaded while the form has unsaved changes; keeping edits");
                    } else {
                        self.settings_draft = settings.clone();
                    }
                    self.settings_saved = settings;
                }
                UiMessage::SettingsLoaded(None) => {
                    self.log_info("No stored settings, using defaults");
                }
                UiMessage::LoadError(e) => {
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                }
                UiMessage::SupplierSaved(supplier) => {
                    self.success_message = Some(format!("Supplier '{}' saved", supplier.name));
                    self.log_success(format!("Supplier saved: {}", supplier.name));
                    self.supplier_form.reset();
                    self.suppliers.upsert(supplier);
                }
                UiMessage::SupplierDeleted(id) => {
                    self.apply_supplier_deleted(id);
                }
                UiMessage::SettingsSaved(settings) => {
                    self.settings_saving = false;
                    self.settings_saved = settings;
                    self.success_message = Some("Settings saved".to_string());
                    self.log_success("Settings saved");
                }
                UiMessage::OperationFailed(e) => {
                    self.settings_saving = false;
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                }
                UiMessage::DatabaseTestResult(result) => {
                    match &result {
                        Ok(()) => self.log_success("Database connection successful"),
                        Err(e) => self.log_error(format!("Database connection failed: {e}")),
                    }
                    self.database_test_status = Some(result);
                }
            }
        }
    }

    /// Apply the saved theme when it changes.
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.settings_saved.theme;
        if self.applied_theme == Some(theme) {
            return;
        }
        let preference = match theme {
            Theme::Light => egui::ThemePreference::Light,
            Theme::Dark => egui::ThemePreference::Dark,
            Theme::System => egui::ThemePreference::System,
        };
        ctx.set_theme(preference);
        self.applied_theme = Some(theme);
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    let (color, text) = if self.is_online() {
                        (colors::SUCCESS, "Connected".to_string())
                    } else {
                        (colors::WARNING, "Offline (changes are not persisted)".to_string())
                    };
                    ui.colored_label(color, format!("Database: {}", text));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.settings_saving {
                            ui.spinner();
                            ui.label("Saving settings...");
                        }
                        ui.label(RichText::new(&self.route).weak());
                    });
                });
            });
    }

    /// Render the sidebar with company header and navigation menu.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        let mut action = None;

        egui::SidePanel::left("erp_sidebar")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let logo = self.settings_saved.logo_url.trim();
                    if !logo.is_empty() {
                        ui.add(egui::Image::new(logo).max_height(32.0).max_width(32.0));
                    }
                    ui.label(RichText::new(&self.settings_saved.company_name).size(18.0).strong());
                });
                ui.add_space(10.0);
                ui.separator();

                action = sidebar::show(ui, &self.menu, &self.expanded);

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(8.0);
                    if ui.link("Back to home").clicked() {
                        action = Some(sidebar::SidebarAction::Navigate("/".to_string()));
                    }
                });
            });

        match action {
            Some(sidebar::SidebarAction::Navigate(url)) => {
                if self.menu.find(&url).is_some_and(|item| item.has_children()) {
                    self.expanded.insert(url.clone());
                }
                self.navigate(&url);
            }
            Some(sidebar::SidebarAction::Toggle(url)) => self.toggle_group(&url),
            None => {}
        }
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        if self.show_delete_confirm
            && let Some(target) = self.delete_target.clone()
        {
            egui::Window::new("Delete Supplier")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!("Delete supplier '{}'?", target.name));
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                            self.log_info(format!("Deleting supplier: {}", target.name));
                            self.delete_supplier(target.id);
                        }
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_results();
        self.apply_theme(ctx);

        // Background tasks report through the channel; keep polling while one may be pending.
        if self.settings_saving || !self.rx.is_empty() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        self.show_dialogs(ctx);

        if self.current_panel == Panel::Landing {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(route) = landing::show(&self.landing, ui) {
                    self.navigate(&route);
                }
            });
            return;
        }

        self.show_status_bar(ctx);
        self.show_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(e) = &self.database_error {
                ui.colored_label(colors::WARNING, format!("Database unavailable: {e}"));
                ui.add_space(6.0);
            }

            match self.current_panel.clone() {
                Panel::Landing => {}
                Panel::Dashboard => {
                    if let Some(route) = dashboard::show(self, ui) {
                        self.navigate(&route);
                    }
                }
                Panel::Suppliers => {
                    if supplier_panel::show(self, ui) {
                        self.navigate("/erp/dashboard");
                    }
                }
                Panel::Settings => {
                    if settings_panel::show(self, ui) {
                        self.navigate("/erp/dashboard");
                    }
                }
                Panel::Placeholder(_) => {
                    let title = self.route_title();
                    if placeholder_panel::show(ui, &title) {
                        self.navigate("/erp/dashboard");
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::default_erp_menu;
    use crate::models::settings::SettingsEdit;

    fn offline_app(tag: &str) -> App {
        let dir = std::env::temp_dir().join(format!("erp-shell-app-{}-{}", tag, std::process::id()));
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(
            rt,
            None,
            None,
            AppConfig::default(),
            dir.join("config.toml"),
            default_erp_menu(),
        )
    }

    fn supplier_data(name: &str, email: &str) -> CreateSupplier {
        CreateSupplier {
            name: name.to_string(),
            contact: "555 0100".to_string(),
            email: email.to_string(),
            address: "1 Road".to_string(),
            status: SupplierStatus::Active,
        }
    }

    #[test]
    fn test_panel_from_route() {
        assert_eq!(Panel::from_route("/"), Panel::Landing);
        assert_eq!(Panel::from_route("/erp/dashboard"), Panel::Dashboard);
        assert_eq!(Panel::from_route("/admin/suppliers"), Panel::Suppliers);
        assert_eq!(Panel::from_route("/erp/inventory/suppliers/"), Panel::Suppliers);
        assert_eq!(Panel::from_route("/admin/settings"), Panel::Settings);
        assert_eq!(Panel::from_route("/erp/admin/settings"), Panel::Settings);
        assert_eq!(
            Panel::from_route("/erp/hr/payroll"),
            Panel::Placeholder("/erp/hr/payroll".to_string())
        );
    }

    #[test]
    fn test_supplier_form_edit_round_trip() {
        let supplier = Supplier {
            id: 9,
            name: "Initech".to_string(),
            contact: "555 0199".to_string(),
            email: "buy@initech.example".to_string(),
            address: "4 Office Park".to_string(),
            status: SupplierStatus::Inactive,
        };

        let form = SupplierForm::edit(&supplier);
        assert!(form.is_open && form.is_editing);
        assert_eq!(form.id, Some(9));
        assert_eq!(form.to_create().into_supplier(9), supplier);
    }

    #[test]
    fn test_supplier_form_reset() {
        let mut form = SupplierForm::open_new();
        form.name = "Draft".to_string();
        form.reset();
        assert!(!form.is_open);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_late_settings_load_keeps_unsaved_edits() {
        let mut app = offline_app("late-load");
        app.settings_draft = app
            .settings_draft
            .with_edit(SettingsEdit::CompanyName("Globex".to_string()));

        let stored = CompanySettings::default().with_edit(SettingsEdit::Theme(Theme::Dark));
        assert!(app.tx.send(UiMessage::SettingsLoaded(Some(stored.clone()))).is_ok());
        app.poll_async_results();

        assert_eq!(app.settings_draft.company_name, "Globex");
        assert_eq!(app.settings_saved, stored);
        assert!(app.settings_modified());
    }

    #[test]
    fn test_settings_load_replaces_clean_draft() {
        let mut app = offline_app("clean-load");
        let stored = CompanySettings::default().with_edit(SettingsEdit::CompanyName("Initech".to_string()));

        assert!(app.tx.send(UiMessage::SettingsLoaded(Some(stored.clone()))).is_ok());
        app.poll_async_results();

        assert_eq!(app.settings_draft, stored);
        assert!(!app.settings_modified());
    }

    #[test]
    fn test_invalid_supplier_is_not_stored() {
        let mut app = offline_app("invalid");
        let before = app.suppliers.len();

        app.create_supplier(supplier_data("", "nobody@example.com"));
        assert_eq!(app.suppliers.len(), before);
        assert!(app.error_message.is_some());

        app.error_message = None;
        app.create_supplier(supplier_data("Bad Mail", "a@b..com"));
        assert_eq!(app.suppliers.len(), before);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_offline_duplicate_email_is_rejected() {
        let mut app = offline_app("dup-email");
        let before = app.suppliers.len();

        app.create_supplier(supplier_data("Copycat", "sales@acme.example"));
        assert_eq!(app.suppliers.len(), before);
        assert!(app.error_message.is_some());

        app.error_message = None;
        app.update_supplier(2, supplier_data("Global Parts Ltd", "sales@acme.example"));
        assert!(app.error_message.is_some());
        assert_eq!(app.suppliers.get(2).unwrap().email, "info@globalparts.example");

        app.error_message = None;
        app.update_supplier(1, supplier_data("Acme Supplies", "sales@acme.example"));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_offline_add_delete_add_never_reuses_ids() {
        let mut app = offline_app("ids");
        let before = app.suppliers.len();

        app.create_supplier(supplier_data("Contoso", "buy@contoso.example"));
        assert_eq!(app.suppliers.len(), before + 1);
        let first = app.suppliers.iter().last().unwrap().id;

        app.delete_supplier(first);
        assert!(app.suppliers.get(first).is_none());

        app.create_supplier(supplier_data("Fabrikam", "buy@fabrikam.example"));
        let second = app.suppliers.iter().last().unwrap().id;
        assert_ne!(first, second);

        let ids: Vec<i32> = app.suppliers.iter().map(|s| s.id).collect();
        let unique: HashSet<i32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_navigate_expands_active_group() {
        let mut app = offline_app("navigate");
        app.navigate("/erp/inventory/suppliers");

        assert_eq!(app.current_panel, Panel::Suppliers);
        assert!(app.expanded.contains("/erp/inventory"));
        assert!(app.menu.find("/erp/inventory/suppliers").unwrap().is_active);
        assert!(app.menu.find("/erp/inventory").unwrap().is_active);
        assert!(!app.menu.find("/erp/dashboard").unwrap().is_active);

        app.navigate("/erp/dashboard");
        assert_eq!(app.current_panel, Panel::Dashboard);
        assert!(!app.menu.find("/erp/inventory/suppliers").unwrap().is_active);
        assert!(app.menu.find("/erp/dashboard").unwrap().is_active);
    }

    #[test]
    fn test_toggle_group() {
        let mut app = offline_app("toggle");
        assert!(!app.expanded.contains("/erp/hr"));

        app.toggle_group("/erp/hr");
        assert!(app.expanded.contains("/erp/hr"));

        app.toggle_group("/erp/hr");
        assert!(!app.expanded.contains("/erp/hr"));
    }
}
