//! Money and lenient numeric parsing.
//!
//! The backend serializes `DecimalField`s as strings (`"1500.00"`), some
//! aggregate endpoints return floats, and older payloads carry currency text
//! (`"PKR 1,500"`). Everything funnels through [`Amount`], which stores whole
//! paisa so totals and percentages never touch floating point.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A rupee amount held as an integer count of paisa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Build an amount from whole rupees.
    #[must_use]
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Build an amount from paisa.
    #[must_use]
    pub const fn from_paisa(paisa: i64) -> Self {
        Self(paisa)
    }

    /// The raw paisa value.
    #[must_use]
    pub const fn paisa(self) -> i64 {
        self.0
    }

    /// Whole rupees, rounded half away from zero.
    #[must_use]
    pub const fn rupees_rounded(self) -> i64 {
        if self.0 >= 0 {
            (self.0 + 50) / 100
        } else {
            (self.0 - 50) / 100
        }
    }

    /// Whether the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse a decimal string, tolerating thousands separators and currency
    /// text. Returns `None` when no digits are present.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let negative = cleaned.starts_with('-');
        let unsigned = cleaned.trim_start_matches('-');
        let mut parts = unsigned.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts
            .next()
            .unwrap_or_default()
            .split('.')
            .next()
            .unwrap_or_default();

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let mut digits = fraction.chars().filter(char::is_ascii_digit);
        let tens = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
        let ones = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
        let round_up = digits
            .next()
            .and_then(|c| c.to_digit(10))
            .is_some_and(|d| d >= 5);

        let mut paisa = whole.checked_mul(100)? + i64::from(tens * 10 + ones);
        if round_up {
            paisa += 1;
        }
        Some(Self(if negative { -paisa } else { paisa }))
    }

    /// Convert a JSON float into paisa.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 100.0).round() as i64)
        } else {
            Self::ZERO
        }
    }

    /// Percentage of `goal` this amount represents, rounded. A zero goal
    /// yields zero. The result is not clamped; overfunded campaigns exceed 100.
    #[must_use]
    pub fn percent_of(self, goal: Self) -> u32 {
        if goal.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        let scaled = (i128::from(self.0) * 100 + i128::from(goal.0) / 2) / i128::from(goal.0);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    /// Whole rupees with thousands separators, e.g. `1,250,000`.
    #[must_use]
    pub fn grouped(self) -> String {
        let rupees = self.rupees_rounded();
        let digits = rupees.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rupees < 0 {
            out.push('-');
        }
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Two-decimal wire representation, e.g. `1500.00`.
    #[must_use]
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PKR {}", self.grouped())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<LooseNumber>::deserialize(deserializer)?;
        Ok(match value {
            Some(LooseNumber::Int(rupees)) => Self::from_rupees(rupees),
            Some(LooseNumber::Float(value)) => Self::from_f64(value),
            Some(LooseNumber::Text(text)) => Self::parse_lenient(&text).unwrap_or_default(),
            None => Self::ZERO,
        })
    }
}

/// Deserialize an optional coordinate sent either as a decimal string or a
/// JSON number.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Int(value)) => Some(value as f64),
        Some(LooseNumber::Float(value)) => Some(value),
        Some(LooseNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// Deserialize a count that may arrive as a number, a numeric string, or null.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Int(value)) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
        Some(LooseNumber::Float(value)) if value.is_finite() && value > 0.0 => value as u32,
        Some(LooseNumber::Text(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1500.00", 150_000 ; "decimal string")]
    #[test_case("1,250,000", 125_000_000 ; "thousands separators")]
    #[test_case("PKR 2,500.5", 250_050 ; "currency prefix")]
    #[test_case("10.999", 1_100 ; "rounds third decimal")]
    #[test_case(".75", 75 ; "missing whole part")]
    #[test_case("-20", -2_000 ; "negative")]
    fn parses_lenient_amounts(raw: &str, paisa: i64) {
        assert_eq!(Amount::parse_lenient(raw), Some(Amount::from_paisa(paisa)));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(Amount::parse_lenient("N/A"), None);
        assert_eq!(Amount::parse_lenient(""), None);
    }

    #[test]
    fn deserializes_strings_numbers_and_null() {
        let parsed: Vec<Amount> =
            serde_json::from_str(r#"["1500.00", 200, 12.5, null, "n/a"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Amount::from_rupees(1500),
                Amount::from_rupees(200),
                Amount::from_paisa(1250),
                Amount::ZERO,
                Amount::ZERO,
            ]
        );
    }

    #[test]
    fn serializes_as_two_decimal_string() {
        let json = serde_json::to_string(&Amount::from_paisa(123_405)).unwrap();
        assert_eq!(json, "\"1234.05\"");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(Amount::from_rupees(0).grouped(), "0");
        assert_eq!(Amount::from_rupees(999).grouped(), "999");
        assert_eq!(Amount::from_rupees(1000).grouped(), "1,000");
        assert_eq!(Amount::from_rupees(1_234_567).grouped(), "1,234,567");
        assert_eq!(Amount::from_rupees(50_000).to_string(), "PKR 50,000");
    }

    #[test]
    fn percent_handles_zero_goal_and_overfunding() {
        let goal = Amount::from_rupees(1000);
        assert_eq!(Amount::from_rupees(250).percent_of(goal), 25);
        assert_eq!(Amount::from_rupees(1100).percent_of(goal), 110);
        assert_eq!(Amount::from_rupees(5).percent_of(Amount::ZERO), 0);
        assert_eq!(Amount::from_paisa(333).percent_of(Amount::from_rupees(10)), 33);
    }

    #[test]
    fn sums_and_subtracts() {
        let total: Amount = [Amount::from_rupees(10), Amount::from_rupees(15)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::from_rupees(25));
        assert_eq!(total - Amount::from_rupees(5), Amount::from_rupees(20));
    }
}
