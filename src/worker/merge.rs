use crate::{
    common::{employee::EmployeeKey, error::AppError},
    domain::{accrual::Accrual, ledger::Ledger},
    worker::accrual::ACCRUAL_PERIOD,
};

/// The updated ledger plus the employees a merge newly created.
#[derive(Debug)]
pub struct MergeOutcome {
    pub ledger: Ledger,
    pub added: Vec<EmployeeKey>,
}

/// Folds a batch of accruals into the prior ledger snapshot.
///
/// Consumes the snapshot and returns the new one; the caller decides when the
/// result becomes durable. Employees absent from the snapshot get a fresh
/// entry and are reported through [`MergeOutcome::added`]; every prior entry
/// not named by the batch passes through untouched.
///
/// Each batch item is applied independently: the delta is added to the banked
/// remainder, and once the combined remainder reaches a full accrual period it
/// rolls over into one more vacation hour. A remainder of exactly 40.00 rolls
/// over, it is not banked.
pub fn merge(prior: Ledger, batch: &[Accrual]) -> Result<MergeOutcome, AppError> {
    let mut ledger = prior;
    let mut added = Vec::new();

    for accrual in batch {
        if accrual.remainder.is_negative() {
            return Err(AppError::NegativeDelta {
                employee: accrual.employee.to_string(),
            });
        }

        let is_new = !ledger.entries.contains_key(&accrual.employee);
        let entry = ledger.entries.entry(accrual.employee.clone()).or_default();

        let combined = entry.remainder + accrual.remainder;
        let (carry, remainder) = combined.div_rem(ACCRUAL_PERIOD);

        entry.remainder = remainder;
        // carry is 0 or 1: both operands stay below the accrual period
        entry.vacation_hours += carry as u32 + accrual.vacation_hours;

        if is_new {
            added.push(accrual.employee.clone());
        }
    }

    Ok(MergeOutcome { ledger, added })
}
