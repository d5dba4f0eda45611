use std::collections::HashMap;

use crate::{common::employee::EmployeeKey, domain::entry::LedgerEntry};

#[derive(Debug, Default)]
pub struct Ledger {
    pub entries: HashMap<EmployeeKey, LedgerEntry>,
}
impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn entries(&self) -> &HashMap<EmployeeKey, LedgerEntry> {
        &self.entries
    }

    pub fn get(&self, employee: &EmployeeKey) -> Option<&LedgerEntry> {
        self.entries.get(employee)
    }

    pub fn insert(&mut self, employee: EmployeeKey, entry: LedgerEntry) {
        self.entries.insert(employee, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
