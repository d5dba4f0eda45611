use crate::{
    common::{employee::EmployeeKey, error::AppError, hours::Hours, record::TimesheetEntry},
    domain::{entry::LedgerEntry, ledger::Ledger},
};
use std::{io::Read, str::FromStr};

// Lightspeed "Total Hours" export layout: names up front, the total hours
// figure in the fifth column. Every other column is ignored.
const FIRST_NAME_COL: usize = 0;
const LAST_NAME_COL: usize = 1;
const HOURS_COL: usize = 4;

/// Reads and validates timesheet rows from a CSV reader.
///
/// Columns are addressed by position, not header, because the export's header
/// names are not stable across report configurations; the header row itself is
/// skipped by the `csv` reader. Rows too short for the hours column error with
/// the line number, and an hours figure that is not a non-negative number
/// errors with the employee it belongs to.
///
/// # Examples
///
/// ```
/// use vacation_ledger::io::reader::read_timesheet;
/// use csv::ReaderBuilder;
///
/// let data = "First Name,Last Name,Employee ID,Location,Total Hours\n\
/// Jane,Doe,104,Main Street,50\n";
/// let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(data.as_bytes());
/// let entries: Vec<_> = read_timesheet(&mut rdr).collect();
///
/// let entry = entries[0].as_ref().unwrap();
/// assert_eq!(entry.employee.to_string(), "Jane Doe");
/// assert_eq!(entry.hours_worked.as_hundredths(), 5000);
/// ```
pub fn read_timesheet<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<TimesheetEntry, AppError>> + '_ {
    rdr.records().map(|res| {
        let row = res?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let first_name = row.get(FIRST_NAME_COL).ok_or(AppError::ShortRow { line })?;
        let last_name = row.get(LAST_NAME_COL).ok_or(AppError::ShortRow { line })?;
        let employee = EmployeeKey::new(first_name, last_name);

        let raw_hours = row.get(HOURS_COL).ok_or(AppError::ShortRow { line })?;
        let hours_worked = parse_hours(&employee, raw_hours)?;

        Ok(TimesheetEntry {
            employee,
            hours_worked,
        })
    })
}

#[derive(serde::Deserialize)]
/// Persisted snapshot row shape, matching the headers the writer produces.
struct LedgerRow {
    first_name: String,
    last_name: String,
    remainder_hours: String,
    vacation_hours: u32,
}

/// Loads the persisted ledger snapshot from a CSV reader.
///
/// Expected headers: `first_name,last_name,remainder_hours,vacation_hours`.
/// A remainder that is not a non-negative number errors with the employee it
/// belongs to.
pub fn read_ledger<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Ledger, AppError> {
    let mut ledger = Ledger::new();

    for res in rdr.deserialize::<LedgerRow>() {
        let row = res?;
        let employee = EmployeeKey::new(row.first_name, row.last_name);
        let remainder = parse_hours(&employee, &row.remainder_hours)?;
        ledger.insert(employee, LedgerEntry::new(remainder, row.vacation_hours));
    }

    Ok(ledger)
}

fn parse_hours(employee: &EmployeeKey, raw: &str) -> Result<Hours, AppError> {
    let malformed = || AppError::MalformedRecord {
        employee: employee.to_string(),
        value: raw.to_string(),
    };

    let hours = Hours::from_str(raw).map_err(|_| malformed())?;
    if hours.is_negative() {
        return Err(malformed());
    }
    Ok(hours)
}
