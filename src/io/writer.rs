use std::io::Write;

use crate::domain::ledger::Ledger;

#[derive(serde::Serialize)]
/// Internal CSV output row representation matching the snapshot headers.
///
/// Headers written (in this order):
/// `first_name,last_name,remainder_hours,vacation_hours`. The remainder is
/// formatted with exactly 2 decimal places.
struct OutputRow<'a> {
    first_name: &'a str,
    last_name: &'a str,
    remainder_hours: String,
    vacation_hours: u32,
}

/// Writes the ledger snapshot to a CSV writer.
///
/// For deterministic output, rows are sorted by employee name (first name,
/// then last name) before writing.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use vacation_ledger::common::employee::EmployeeKey;
/// use vacation_ledger::domain::{entry::LedgerEntry, ledger::Ledger};
/// use vacation_ledger::io::writer::write_ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.insert(EmployeeKey::new("Jane", "Doe"), LedgerEntry::default());
/// ledger.insert(EmployeeKey::new("Bob", "Smith"), LedgerEntry::default());
///
/// let mut out = Vec::new();
/// write_ledger(&mut out, &ledger).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("first_name,last_name,remainder_hours,vacation_hours\n"));
/// // and rows are sorted by name
/// assert!(s.find("Bob").unwrap() < s.find("Jane").unwrap());
/// ```
pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written up front so an empty ledger still round-trips through the reader.
    wtr.write_record(["first_name", "last_name", "remainder_hours", "vacation_hours"])?;

    // Deterministic output: sort by employee name.
    let mut rows: Vec<_> = ledger.entries().iter().collect();
    rows.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    for (employee, entry) in rows {
        wtr.serialize(OutputRow {
            first_name: &employee.first_name,
            last_name: &employee.last_name,
            remainder_hours: entry.remainder.to_string_2dp(),
            vacation_hours: entry.vacation_hours,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
