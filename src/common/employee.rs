use std::fmt;

/// Composite employee identity as it appears in the timesheet exports.
///
/// The POS data carries no stable employee id, so the (first, last) name pair
/// is the key. Matching is exact and case-sensitive. Two employees sharing a
/// name would collide under this scheme; swapping in a real id later only
/// requires replacing this type at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeKey {
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
