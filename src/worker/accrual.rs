use crate::{
    common::{error::AppError, hours::Hours, record::TimesheetEntry},
    domain::accrual::Accrual,
};

/// Employees earn 1 vacation hour for every 40 hours worked.
pub const ACCRUAL_PERIOD: Hours = Hours::from_whole(40);

/// Converts one timesheet row into the whole vacation hours it earns plus the
/// remainder to bank.
///
/// Pure: the result depends only on the row. Hours must be non-negative; a
/// negative figure is reported against the employee it belongs to instead of
/// being coerced.
pub fn accrue(entry: &TimesheetEntry) -> Result<Accrual, AppError> {
    if entry.hours_worked.is_negative() {
        return Err(AppError::MalformedRecord {
            employee: entry.employee.to_string(),
            value: entry.hours_worked.to_string(),
        });
    }

    let (whole, remainder) = entry.hours_worked.div_rem(ACCRUAL_PERIOD);
    let vacation_hours = u32::try_from(whole).map_err(|_| AppError::MalformedRecord {
        employee: entry.employee.to_string(),
        value: entry.hours_worked.to_string(),
    })?;

    Ok(Accrual {
        employee: entry.employee.clone(),
        vacation_hours,
        remainder,
    })
}
