use crate::common::{employee::EmployeeKey, hours::Hours};

/// One timesheet row as handed from the reader to the accrual calculator.
#[derive(Debug, Clone)]
pub struct TimesheetEntry {
    pub employee: EmployeeKey,
    pub hours_worked: Hours,
}
