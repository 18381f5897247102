//! Supplier records and DTOs for create and update operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::suppliers;
use crate::error::{AppError, Result};

/// Supplier relationship status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
}

impl SupplierStatus {
    pub const ALL: [SupplierStatus; 2] = [SupplierStatus::Active, SupplierStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(SupplierStatus::Active),
            "inactive" => Ok(SupplierStatus::Inactive),
            other => Err(AppError::parse(format!("unknown supplier status '{other}'"))),
        }
    }
}

/// A supplier as shown in the supplier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub status: SupplierStatus,
}

impl TryFrom<suppliers::Model> for Supplier {
    type Error = AppError;

    fn try_from(model: suppliers::Model) -> Result<Self> {
        Ok(Self {
            id: model.id,
            status: model.status.parse()?,
            name: model.name,
            contact: model.contact,
            email: model.email,
            address: model.address,
        })
    }
}

/// DTO for creating a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSupplier {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub status: SupplierStatus,
}

impl CreateSupplier {
    /// Check required fields and formats. Returns a trimmed copy.
    pub fn validate(&self) -> Result<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Supplier name is required"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !is_valid_email(email) {
            return Err(AppError::validation(format!("Invalid email address: {email}")));
        }
        let contact = self.contact.trim();
        if !contact.is_empty() && !is_valid_phone(contact) {
            return Err(AppError::validation(format!(
                "Invalid contact number: {contact} (digits, spaces and +-() only)"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            contact: contact.to_string(),
            email: email.to_string(),
            address: self.address.trim().to_string(),
            status: self.status,
        })
    }

    /// Build a full record with the given id.
    pub fn into_supplier(self, id: i32) -> Supplier {
        Supplier {
            id,
            name: self.name,
            contact: self.contact,
            email: self.email,
            address: self.address,
            status: self.status,
        }
    }
}

/// DTO for updating a supplier. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub status: Option<SupplierStatus>,
}

impl From<CreateSupplier> for UpdateSupplier {
    fn from(data: CreateSupplier) -> Self {
        Self {
            name: Some(data.name),
            contact: Some(data.contact),
            email: Some(data.email),
            address: Some(data.address),
            status: Some(data.status),
        }
    }
}

impl Supplier {
    /// Apply an update in place.
    pub fn apply(&mut self, data: UpdateSupplier) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(contact) = data.contact {
            self.contact = contact;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(address) = data.address {
            self.address = address;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
    }

    /// Case-insensitive match on name, email or contact.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.contact.to_lowercase().contains(&query)
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
        && labels.last().is_some_and(|tld| tld.len() >= 2)
}

fn is_valid_phone(contact: &str) -> bool {
    contact.chars().any(|c| c.is_ascii_digit())
        && contact
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateSupplier {
        CreateSupplier {
            name: "  Northwind Traders ".to_string(),
            contact: "+1 (555) 010-2000".to_string(),
            email: "orders@northwind.example".to_string(),
            address: "12 Harbour Rd".to_string(),
            status: SupplierStatus::Active,
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let data = sample().validate().unwrap();
        assert_eq!(data.name, "Northwind Traders");
    }

    #[test]
    fn test_validate_requires_name() {
        let mut data = sample();
        data.name = "   ".to_string();
        assert!(matches!(data.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_email_format() {
        for bad in ["", "no-at-sign", "@example.com", "a@b", "a@@b.com", "a b@c.com", "a@.c"] {
            let mut data = sample();
            data.email = bad.to_string();
            assert!(data.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_validate_email_rejects_empty_domain_labels() {
        for bad in ["a@b..com", "a@.b.com", "a@b.com.", "a@b.c"] {
            let mut data = sample();
            data.email = bad.to_string();
            assert!(data.validate().is_err(), "accepted {bad:?}");
        }

        let mut data = sample();
        data.email = "buyer@mail.northwind.example".to_string();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_validate_contact_is_optional_but_checked() {
        let mut data = sample();
        data.contact = String::new();
        assert!(data.validate().is_ok());

        data.contact = "call me".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("inactive".parse::<SupplierStatus>().unwrap(), SupplierStatus::Inactive);
        assert_eq!(" Active ".parse::<SupplierStatus>().unwrap(), SupplierStatus::Active);
        assert!("pending".parse::<SupplierStatus>().is_err());
        assert_eq!(SupplierStatus::Inactive.to_string(), "Inactive");
    }

    #[test]
    fn test_apply_update_changes_only_given_fields() {
        let mut supplier = sample().validate().unwrap().into_supplier(4);
        supplier.apply(UpdateSupplier {
            status: Some(SupplierStatus::Inactive),
            ..Default::default()
        });
        assert_eq!(supplier.status, SupplierStatus::Inactive);
        assert_eq!(supplier.name, "Northwind Traders");
        assert_eq!(supplier.id, 4);
    }

    #[test]
    fn test_matches() {
        let supplier = sample().validate().unwrap().into_supplier(1);
        assert!(supplier.matches("north"));
        assert!(supplier.matches("ORDERS@"));
        assert!(supplier.matches("010"));
        assert!(supplier.matches(""));
        assert!(!supplier.matches("contoso"));
    }
}
