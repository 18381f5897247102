pub use super::company_settings::Entity as CompanySettings;
pub use super::suppliers::Entity as Suppliers;
