pub mod accrual;
pub mod entry;
pub mod ledger;
