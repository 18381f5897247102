//! SeaORM entities.

pub mod prelude;

pub mod company_settings;
pub mod suppliers;
