#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("record for {employee} has hours value '{value}' that is not a non-negative number")]
    MalformedRecord { employee: String, value: String },
    #[error("timesheet row {line} is missing required columns")]
    ShortRow { line: u64 },
    #[error("negative accrual delta for {employee}; refusing to apply the batch")]
    NegativeDelta { employee: String },
    #[error("vacation ledger not found at {path}; create it with headers first_name,last_name,remainder_hours,vacation_hours")]
    MissingLedger { path: String },
}
