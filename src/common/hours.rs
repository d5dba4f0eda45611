use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

const SCALE: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A worked-hours figure stored as an integer count of hundredths of an hour.
///
/// # Why Use Hours? It is a Value Object.
/// Timesheet exports report hours with two decimal places. Keeping the value
/// as an integer (in hundredths) makes every later addition, division and
/// modulo exact, so banked remainders carried from run to run never drift the
/// way repeated floating-point arithmetic would. Any extra precision in the
/// input is removed once, at parse time, rounding ties half-to-even.
///
/// The value is signed so a negative figure survives parsing and can be
/// rejected upstream with the employee it belongs to.
///
/// # Examples
/// ```
/// use vacation_ledger::common::hours::Hours;
///
/// let hours: Hours = "38.25".parse().unwrap();
/// assert_eq!(hours.as_hundredths(), 3825);
/// assert_eq!(hours.to_string_2dp(), "38.25");
/// ```
pub struct Hours(i64);

impl Hours {
    pub const fn from_hundredths(value: i64) -> Self {
        Hours(value)
    }

    pub const fn from_whole(hours: i64) -> Self {
        Hours(hours * SCALE)
    }

    pub fn zero() -> Self {
        Hours(0)
    }

    pub fn as_hundredths(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Integer-divides by `divisor`, returning the quotient and the remainder.
    pub fn div_rem(self, divisor: Hours) -> (i64, Hours) {
        (self.0 / divisor.0, Hours(self.0 % divisor.0))
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Hours {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty hours".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 2 decimal places; ties round half-to-even.
        let scaled = (bd * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfEven);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("hours overflow".into()))?;

        Ok(Hours(value))
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Hours {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Hours {}

impl PartialOrd for Hours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hours {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Hours {
    type Output = Hours;
    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl AddAssign for Hours {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Hours::zero(), Hours(0));
    }

    #[test]
    fn test_as_hundredths() {
        assert_eq!(Hours(3825).as_hundredths(), 3825);
        assert_eq!(Hours::zero().as_hundredths(), 0);
        assert_eq!(Hours(-50).as_hundredths(), -50);
    }

    #[test]
    fn test_from_whole() {
        assert_eq!(Hours::from_whole(40), Hours(4000));
        assert_eq!(Hours::from_whole(0), Hours(0));
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Hours::from_str("1").unwrap(), Hours(100));
        assert_eq!(Hours::from_str("38.5").unwrap(), Hours(3850));
        assert_eq!(Hours::from_str("0.25").unwrap(), Hours(25));
        assert_eq!(Hours::from_str("  40.00 ").unwrap(), Hours(4000));
    }

    #[test]
    fn test_from_str_keeps_sign() {
        assert_eq!(Hours::from_str("-8.5").unwrap(), Hours(-850));
        assert!(Hours::from_str("-8.5").unwrap().is_negative());
        assert!(!Hours::from_str("8.5").unwrap().is_negative());
    }

    #[test]
    fn test_from_str_rounds_ties_to_even() {
        assert_eq!(Hours::from_str("0.125").unwrap(), Hours(12));
        assert_eq!(Hours::from_str("0.135").unwrap(), Hours(14));
        assert_eq!(Hours::from_str("1.005").unwrap(), Hours(100));
        assert_eq!(Hours::from_str("39.999").unwrap(), Hours(4000));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Hours::from_str("").is_err());
        assert!(Hours::from_str("   ").is_err());
        assert!(Hours::from_str("abc").is_err());
    }

    #[test]
    fn test_div_rem() {
        let week = Hours::from_whole(40);
        assert_eq!(Hours(5000).div_rem(week), (1, Hours(1000)));
        assert_eq!(Hours(4000).div_rem(week), (1, Hours(0)));
        assert_eq!(Hours(3999).div_rem(week), (0, Hours(3999)));
        assert_eq!(Hours(12345).div_rem(week), (3, Hours(345)));
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Hours(3825).to_string_2dp(), "38.25");
        assert_eq!(Hours(5000).to_string_2dp(), "50.00");
        assert_eq!(Hours(1).to_string_2dp(), "0.01");
        assert_eq!(Hours(0).to_string_2dp(), "0.00");
    }

    #[test]
    fn test_display() {
        assert_eq!(Hours(1050).to_string(), "10.50");
        assert_eq!(Hours(25).to_string(), "0.25");
    }

    #[test]
    fn test_add() {
        assert_eq!(Hours(3950) + Hours(100), Hours(4050));
        assert_eq!(Hours::zero() + Hours(100), Hours(100));
    }

    #[test]
    fn test_add_assign() {
        let mut h = Hours(3500);
        h += Hours(1000);
        assert_eq!(h, Hours(4500));
    }

    #[test]
    fn test_ordering() {
        assert!(Hours(100) < Hours(150));
        assert!(Hours(150) > Hours(100));
        assert!(Hours(100) <= Hours(100));
        assert!(Hours(100) >= Hours(100));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Hours(100), Hours(100));
        assert_ne!(Hours(100), Hours(50));
    }
}
