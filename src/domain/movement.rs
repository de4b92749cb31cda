use crate::common::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Positive amounts are deposits; everything else, zero included, is a withdrawal.
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

/// One row of an account statement, numbered by its position in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub index: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

impl StatementLine {
    pub fn new(index: usize, amount: Money) -> Self {
        Self {
            index,
            kind: MovementKind::of(amount),
            amount,
        }
    }

    /// Human readable line, e.g. `Movement 3: You withdrew 400.0000`.
    pub fn describe(&self) -> String {
        let verb = match self.kind {
            MovementKind::Deposit => "deposited",
            MovementKind::Withdrawal => "withdrew",
        };
        format!("Movement {}: You {verb} {}", self.index, self.amount.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_sign() {
        assert_eq!(MovementKind::of(Money::from_units(1)), MovementKind::Deposit);
        assert_eq!(MovementKind::of(Money::from_units(-1)), MovementKind::Withdrawal);
        assert_eq!(MovementKind::of(Money::zero()), MovementKind::Withdrawal);
    }

    #[test]
    fn describe_uses_absolute_amount() {
        let line = StatementLine::new(3, Money::from_units(-400));
        assert_eq!(line.kind.as_str(), "withdrawal");
        assert_eq!(line.describe(), "Movement 3: You withdrew 400.0000");
        assert_eq!(
            StatementLine::new(1, Money::from_units(200)).describe(),
            "Movement 1: You deposited 200.0000"
        );
    }
}
