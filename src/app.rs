use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use tracing::info;

use crate::{
    common::error::AppError,
    io::{intake::Intake, reader, writer},
    worker::{accrual, merge},
};

/// File holding the persisted ledger snapshot, kept next to the intake
/// directories.
pub const LEDGER_FILE: &str = "master_vacation_hours.csv";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let base = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let (intake, bootstrapped) = Intake::open(&base)?;
    if bootstrapped {
        info!("folders for parsing created; place timesheet exports into to_parse and run again");
        return Ok(());
    }

    let pending = intake.pending()?;
    if pending.is_empty() {
        info!("no timesheet exports to parse");
        return Ok(());
    }

    let ledger_path = base.join(LEDGER_FILE);
    let ledger_file = File::open(&ledger_path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::MissingLedger {
                path: ledger_path.display().to_string(),
            }
        } else {
            AppError::Io(err)
        }
    })?;
    let mut ledger_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(ledger_file);
    let prior = reader::read_ledger(&mut ledger_reader)?;

    let mut batch = Vec::new();
    for path in &pending {
        info!("parsing {}", path.display());
        let file = File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);
        for entry in reader::read_timesheet(&mut rdr) {
            batch.push(accrual::accrue(&entry?)?);
        }
    }

    let outcome = merge::merge(prior, &batch)?;
    for employee in &outcome.added {
        info!("{employee} has been added to the vacation ledger");
    }

    // The snapshot on disk is only replaced once the whole batch merged.
    let out = BufWriter::new(File::create(&ledger_path)?);
    writer::write_ledger(out, &outcome.ledger)?;

    intake.archive(&pending)?;
    info!("vacation hours successfully updated");

    Ok(())
}
