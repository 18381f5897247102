pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod settings_store;
pub mod supplier_book;
pub mod ui;

pub use error::{AppError, Result};
