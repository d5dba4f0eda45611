use crate::common::{employee::EmployeeKey, hours::Hours};

/// The vacation time earned from a single timesheet row.
///
/// `remainder` stays below the 40-hour accrual period when produced by
/// `worker::accrual::accrue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accrual {
    pub employee: EmployeeKey,
    pub vacation_hours: u32,
    pub remainder: Hours,
}
