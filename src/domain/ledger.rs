//! Derived views over a movement history.
//!
//! Every function here is pure: it reads a slice of movements and never
//! touches the stored sequence.

use crate::common::{money::Money, rate::InterestRate};
use crate::domain::account::Account;

/// Sum of all movements.
pub fn balance(movements: &[Money]) -> Money {
    movements.iter().sum()
}

/// Sum of the positive movements.
pub fn total_deposits(movements: &[Money]) -> Money {
    movements.iter().filter(|m| m.is_positive()).sum()
}

/// Absolute value of the sum of the negative movements.
pub fn total_withdrawals(movements: &[Money]) -> Money {
    movements
        .iter()
        .filter(|m| m.is_negative())
        .sum::<Money>()
        .abs()
}

/// Interest credited on deposits.
///
/// Interest is computed per deposit as `deposit * rate / 100`. A deposit whose
/// interest is below one whole unit earns nothing; the threshold applies to
/// each deposit, not to the total.
///
/// ```
/// use std::str::FromStr;
/// use bankist_ledger::common::{money::Money, rate::InterestRate};
/// use bankist_ledger::domain::ledger::qualifying_interest;
///
/// let movements = [Money::from_units(50), Money::from_units(1300)];
/// let rate = InterestRate::from_str("1.2").unwrap();
/// assert_eq!(qualifying_interest(&movements, rate), Money::from_str("15.6").unwrap());
/// ```
pub fn qualifying_interest(movements: &[Money], rate: InterestRate) -> Money {
    let threshold = Money::from_units(1);
    movements
        .iter()
        .filter(|m| m.is_positive())
        .map(|deposit| rate.interest_on(*deposit))
        .filter(|interest| *interest >= threshold)
        .sum()
}

/// Display projection of the movements: ascending when `ascending` is set,
/// storage order otherwise. Always a fresh copy.
pub fn sorted_view(movements: &[Money], ascending: bool) -> Vec<Money> {
    let mut view = movements.to_vec();
    if ascending {
        view.sort();
    }
    view
}

pub fn max_movement(movements: &[Money]) -> Option<Money> {
    movements.iter().copied().max()
}

/// True when at least one movement reaches 10% of `amount`, i.e. when the
/// largest movement does.
pub fn has_collateral_for(movements: &[Money], amount: Money) -> bool {
    // max >= amount * 0.1, kept in integers
    max_movement(movements)
        .is_some_and(|max| i128::from(max.as_i64()) * 10 >= i128::from(amount.as_i64()))
}

/// True when `movements` plus `extra` still has a balance, a deposit total and
/// a withdrawal total that fit in `Money` without saturating.
pub fn accepts_movement(movements: &[Money], extra: Money) -> bool {
    let with_extra = || movements.iter().chain(std::iter::once(&extra));
    let deposits = Money::checked_sum(with_extra().filter(|m| m.is_positive()));
    let withdrawals = Money::checked_sum(with_extra().filter(|m| m.is_negative()))
        .and_then(Money::checked_neg);
    Money::checked_sum(with_extra()).is_some() && deposits.is_some() && withdrawals.is_some()
}

/// Sum of every movement across all accounts.
pub fn overall_balance(accounts: &[Account]) -> Money {
    accounts
        .iter()
        .flat_map(|acc| acc.movements().iter())
        .sum()
}
