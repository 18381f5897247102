//! Supplier repository with CRUD operations.

use crate::entities::{prelude::*, suppliers};
use crate::models::supplier::{CreateSupplier, UpdateSupplier};
use sea_orm::*;

/// List all suppliers in insertion order.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<suppliers::Model>, DbErr> {
    Suppliers::find().order_by_asc(suppliers::Column::Id).all(db).await
}

/// Create a new supplier. The id comes from the serial column.
pub async fn create(db: &DatabaseConnection, data: CreateSupplier) -> Result<suppliers::Model, DbErr> {
    let model = suppliers::ActiveModel {
        name: Set(data.name),
        contact: Set(data.contact),
        email: Set(data.email),
        address: Set(data.address),
        status: Set(data.status.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    model.insert(db).await
}

/// Update an existing supplier.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    data: UpdateSupplier,
) -> Result<Option<suppliers::Model>, DbErr> {
    let existing = Suppliers::find_by_id(id).one(db).await?;

    match existing {
        Some(model) => {
            let mut active: suppliers::ActiveModel = model.into();

            if let Some(name) = data.name {
                active.name = Set(name);
            }
            if let Some(contact) = data.contact {
                active.contact = Set(contact);
            }
            if let Some(email) = data.email {
                active.email = Set(email);
            }
            if let Some(address) = data.address {
                active.address = Set(address);
            }
            if let Some(status) = data.status {
                active.status = Set(status.to_string());
            }

            let updated = active.update(db).await?;
            Ok(Some(updated))
        }
        None => Ok(None),
    }
}

/// Delete a supplier by ID.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = Suppliers::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Check if a supplier email is already registered (for validation).
pub async fn email_exists(db: &DatabaseConnection, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
    let mut query = Suppliers::find().filter(suppliers::Column::Email.eq(email));

    if let Some(id) = exclude_id {
        query = query.filter(suppliers::Column::Id.ne(id));
    }

    let count = query.count(db).await?;
    Ok(count > 0)
}
