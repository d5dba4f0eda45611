pub mod accrual;
pub mod merge;
