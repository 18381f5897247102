//! Data models for suppliers, company settings, and employees.

pub mod employee;
pub mod settings;
pub mod supplier;

pub use employee::{Employee, EmployeeStatus};
pub use settings::{CompanySettings, SettingsEdit, Theme};
pub use supplier::{CreateSupplier, Supplier, SupplierStatus, UpdateSupplier};
