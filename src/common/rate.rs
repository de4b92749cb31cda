use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::fmt;

use crate::common::money::{Money, SCALE};

/// Annual interest rate as a percentage, kept at 4 decimal places
/// (`1.2` is stored as `12_000`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterestRate(i64);

impl InterestRate {
    /// `120` basis points is a rate of `1.2` %.
    pub fn from_basis_points(bp: i64) -> Self {
        InterestRate(bp * (SCALE / 100))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Interest earned by a single amount: `amount * rate / 100`, rounded to
    /// 4 decimal places. Saturates at [`Money::MAX`] / [`Money::MIN`] when
    /// the result leaves the representable range (only possible above 100 %).
    pub fn interest_on(&self, amount: Money) -> Money {
        let scaled =
            amount.to_big_decimal() * BigDecimal::from(self.0) / BigDecimal::from(100 * SCALE);
        Money::from_scaled(&scaled).unwrap_or_else(|| {
            if scaled < BigDecimal::from(0) {
                Money::MIN
            } else {
                Money::MAX
            }
        })
    }
}

impl std::str::FromStr for InterestRate {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty rate".into()));
        }
        let bd: BigDecimal = t.parse()?;
        (bd * BigDecimal::from(SCALE))
            .round(0)
            .to_i64()
            .map(InterestRate)
            .ok_or_else(|| ParseBigDecimalError::Other("rate overflow".into()))
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", Money::new(self.0))
    }
}
