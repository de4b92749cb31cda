use crate::{
    common::{money::Money, rate::InterestRate},
    domain::account::Account,
};

fn movements(units: &[i64]) -> Vec<Money> {
    units.iter().copied().map(Money::from_units).collect()
}

/// The four demo accounts the bank opens with.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            1111,
            movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]),
            InterestRate::from_basis_points(120),
        ),
        Account::new(
            "Jessica Davis",
            2222,
            movements(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]),
            InterestRate::from_basis_points(150),
        ),
        Account::new(
            "Steven Thomas Williams",
            3333,
            movements(&[200, -200, 340, -300, -20, 50, 400, -460]),
            InterestRate::from_basis_points(70),
        ),
        Account::new(
            "Sarah Smith",
            4444,
            movements(&[430, 1000, 700, 50, 90]),
            InterestRate::from_basis_points(100),
        ),
    ]
}
