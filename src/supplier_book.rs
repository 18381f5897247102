//! In-memory supplier collection backing the supplier table.
//!
//! Ids come from a counter that only moves forward, so deleting a record
//! never frees its id for reuse.

use crate::error::{AppError, Result};
use crate::models::supplier::{CreateSupplier, Supplier, UpdateSupplier};

#[derive(Debug, Clone)]
pub struct SupplierBook {
    suppliers: Vec<Supplier>,
    next_id: i32,
}

impl Default for SupplierBook {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplierBook {
    pub fn new() -> Self {
        Self {
            suppliers: Vec::new(),
            next_id: 1,
        }
    }

    /// Demo rows shown when no database is available.
    pub fn sample() -> Self {
        let rows = [
            ("Acme Supplies", "+1 555 0100", "sales@acme.example", "100 Main St, Springfield"),
            ("Global Parts Ltd", "+44 20 7946 0000", "info@globalparts.example", "8 Dock Rd, London"),
            ("Sunrise Logistics", "+61 2 5550 1234", "ops@sunrise.example", "22 Bay St, Sydney"),
        ];
        let mut book = Self::new();
        for (name, contact, email, address) in rows {
            book.add(CreateSupplier {
                name: name.to_string(),
                contact: contact.to_string(),
                email: email.to_string(),
                address: address.to_string(),
                ..Default::default()
            });
        }
        book
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.iter()
    }

    pub fn get(&self, id: i32) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Whether another supplier already uses `email`.
    pub fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> bool {
        self.suppliers
            .iter()
            .any(|s| s.email == email && Some(s.id) != exclude_id)
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    /// Append a new supplier with a fresh id.
    pub fn add(&mut self, data: CreateSupplier) -> &Supplier {
        let id = self.next_id;
        self.next_id += 1;
        self.suppliers.push(data.into_supplier(id));
        &self.suppliers[self.suppliers.len() - 1]
    }

    /// Insert a record whose id was assigned elsewhere (database serial).
    ///
    /// An existing record with the same id is replaced in place.
    pub fn upsert(&mut self, supplier: Supplier) {
        self.next_id = self.next_id.max(supplier.id + 1);
        match self.suppliers.iter_mut().find(|s| s.id == supplier.id) {
            Some(existing) => *existing = supplier,
            None => self.suppliers.push(supplier),
        }
    }

    /// Replace the whole collection (e.g. after reloading from the database).
    ///
    /// The id counter never moves backwards.
    pub fn replace_all(&mut self, suppliers: Vec<Supplier>) {
        let max_id = suppliers.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.suppliers = suppliers;
    }

    pub fn update(&mut self, id: i32, data: UpdateSupplier) -> Result<&Supplier> {
        let supplier = self
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found(format!("supplier {id}")))?;
        supplier.apply(data);
        Ok(supplier)
    }

    /// Remove the supplier with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: i32) -> Option<Supplier> {
        let idx = self.suppliers.iter().position(|s| s.id == id)?;
        Some(self.suppliers.remove(idx))
    }

    /// Suppliers matching a search query and optional status filter.
    pub fn filtered<'a>(
        &'a self,
        query: &'a str,
        status: Option<crate::models::SupplierStatus>,
    ) -> impl Iterator<Item = &'a Supplier> + 'a {
        self.suppliers
            .iter()
            .filter(move |s| s.matches(query) && status.is_none_or(|st| s.status == st))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::SupplierStatus;

    fn form(name: &str) -> CreateSupplier {
        CreateSupplier {
            name: name.to_string(),
            contact: "555 0100".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "1 Road".to_string(),
            status: SupplierStatus::Active,
        }
    }

    fn ids(book: &SupplierBook) -> Vec<i32> {
        book.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_add_grows_by_one_with_submitted_fields() {
        let mut book = SupplierBook::sample();
        let before = book.len();

        let data = form("Contoso");
        let added = book.add(data.clone()).clone();

        assert_eq!(book.len(), before + 1);
        assert_eq!(added.name, data.name);
        assert_eq!(added.contact, data.contact);
        assert_eq!(added.email, data.email);
        assert_eq!(added.address, data.address);
        assert_eq!(added.status, data.status);
        assert_eq!(book.iter().last(), Some(&added));
    }

    #[test]
    fn test_remove_keeps_other_records_in_order() {
        let mut book = SupplierBook::new();
        for name in ["A", "B", "C", "D"] {
            book.add(form(name));
        }
        let untouched: Vec<_> = book.iter().filter(|s| s.id != 2).cloned().collect();

        let removed = book.remove(2).unwrap();
        assert_eq!(removed.name, "B");
        assert!(book.get(2).is_none());
        assert_eq!(book.iter().cloned().collect::<Vec<_>>(), untouched);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut book = SupplierBook::sample();
        let before: Vec<_> = book.iter().cloned().collect();
        assert!(book.remove(99).is_none());
        assert_eq!(book.iter().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_add_delete_add_never_reuses_ids() {
        let mut book = SupplierBook::new();
        book.add(form("A"));
        book.add(form("B"));
        let c = book.add(form("C")).id;

        book.remove(c);
        book.remove(1);
        let d = book.add(form("D")).id;

        assert_eq!(d, 4);
        let all = ids(&book);
        let unique: HashSet<i32> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(all, vec![2, 4]);
    }

    #[test]
    fn test_ids_stay_unique_across_many_deletes() {
        let mut book = SupplierBook::new();
        let mut seen = HashSet::new();
        for round in 0..5 {
            let a = book.add(form(&format!("A{round}"))).id;
            let b = book.add(form(&format!("B{round}"))).id;
            assert!(seen.insert(a) && seen.insert(b));
            book.remove(a);
        }
        let all = ids(&book);
        let unique: HashSet<i32> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_email_exists_skips_excluded_id() {
        let book = SupplierBook::sample();
        assert!(book.email_exists("sales@acme.example", None));
        assert!(!book.email_exists("sales@acme.example", Some(1)));
        assert!(book.email_exists("sales@acme.example", Some(2)));
        assert!(!book.email_exists("new@vendor.example", None));
    }

    #[test]
    fn test_delete_last_then_add_gets_fresh_id() {
        let mut book = SupplierBook::new();
        let a = book.add(form("A")).id;
        book.remove(a);
        let b = book.add(form("B")).id;
        assert_ne!(a, b);
    }

    #[test]
    fn test_replace_all_keeps_counter_ahead() {
        let mut book = SupplierBook::new();
        book.add(form("A"));
        book.add(form("B"));
        book.add(form("C"));

        book.replace_all(vec![form("X").into_supplier(1)]);
        assert_eq!(book.next_id(), 4);

        book.replace_all(vec![form("Y").into_supplier(10)]);
        assert_eq!(book.next_id(), 11);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut book = SupplierBook::new();
        book.add(form("A"));
        book.add(form("B"));

        let mut renamed = book.get(1).unwrap().clone();
        renamed.name = "A2".to_string();
        book.upsert(renamed);

        assert_eq!(ids(&book), vec![1, 2]);
        assert_eq!(book.get(1).unwrap().name, "A2");

        book.upsert(form("Z").into_supplier(7));
        assert_eq!(ids(&book), vec![1, 2, 7]);
        assert_eq!(book.next_id(), 8);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut book = SupplierBook::new();
        let err = book.update(3, UpdateSupplier::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_update_changes_fields() {
        let mut book = SupplierBook::sample();
        let updated = book
            .update(
                2,
                UpdateSupplier {
                    status: Some(SupplierStatus::Inactive),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, SupplierStatus::Inactive);
        assert_eq!(updated.name, "Global Parts Ltd");
    }

    #[test]
    fn test_filtered_by_query_and_status() {
        let mut book = SupplierBook::sample();
        book.update(
            3,
            UpdateSupplier {
                status: Some(SupplierStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap();

        let active: Vec<_> = book.filtered("", Some(SupplierStatus::Active)).map(|s| s.id).collect();
        assert_eq!(active, vec![1, 2]);

        let hits: Vec<_> = book.filtered("sunrise", None).map(|s| s.id).collect();
        assert_eq!(hits, vec![3]);

        assert_eq!(book.filtered("sunrise", Some(SupplierStatus::Active)).count(), 0);
    }
}
