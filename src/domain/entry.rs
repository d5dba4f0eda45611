use crate::common::hours::Hours;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Worked hours banked until they add up to another vacation hour.
    pub remainder: Hours,
    /// Whole vacation hours earned to date. Only ever accumulates.
    pub vacation_hours: u32,
}

impl LedgerEntry {
    pub fn new(remainder: Hours, vacation_hours: u32) -> Self {
        Self {
            remainder,
            vacation_hours,
        }
    }
}
