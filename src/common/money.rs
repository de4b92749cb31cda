use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of smallest units in one whole currency unit (4 decimal places).
pub(crate) const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// Every movement and every aggregate derived from movements is a `Money`.
/// Keeping amounts as integers makes summation exact and independent of
/// the order in which movements are added.
///
/// The operators saturate at [`Money::MIN`] and [`Money::MAX`] and never
/// panic. Use the `checked_*` methods where an out-of-range result must be
/// rejected instead.
///
/// # Examples
/// ```
/// use bankist_ledger::common::money::Money;
///
/// let amount = Money::from_units(15);
/// assert_eq!(amount.as_i64(), 150_000);
/// assert_eq!(amount.to_string_4dp(), "15.0000");
/// assert_eq!((-amount).to_string_4dp(), "-15.0000");
/// ```
pub struct Money(i64);

impl Money {
    pub const MAX: Money = Money(i64::MAX);
    pub const MIN: Money = Money(i64::MIN);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Builds an amount from whole currency units.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Money(self.0.saturating_abs())
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn checked_neg(self) -> Option<Money> {
        self.0.checked_neg().map(Money)
    }

    /// Exact sum of any number of amounts, `None` when it leaves the `i64` range.
    pub fn checked_sum<'a, I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        i64::try_from(Self::wide_sum(amounts)).ok().map(Money)
    }

    fn wide_sum<'a, I>(amounts: I) -> i128
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts.into_iter().map(|m| i128::from(m.0)).sum()
    }

    fn clamp_wide(value: i128) -> Money {
        let clamped = value.clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        Money(i64::try_from(clamped).unwrap_or_default())
    }

    pub fn to_string_4dp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let raw = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        format!("{sign}{}.{:04}", raw / scale, raw % scale)
    }

    pub(crate) fn to_big_decimal(self) -> BigDecimal {
        BigDecimal::from(self.0)
    }

    /// Rounds a value expressed in smallest units back into `Money`.
    pub(crate) fn from_scaled(scaled: &BigDecimal) -> Option<Self> {
        scaled.round(0).to_i64().map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = bd * BigDecimal::from(SCALE);
        Money::from_scaled(&scaled)
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Summed in i128 and clamped once, so the result does not depend on order.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money::clamp_wide(iter.map(|m| i128::from(m.0)).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        Money::clamp_wide(Money::wide_sum(iter))
    }
}
