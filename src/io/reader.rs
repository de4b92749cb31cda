use crate::common::{event::Intent, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Unused
/// columns stay empty for the intents that do not need them.
struct CsvRow {
    action: String,
    handle: Option<String>,
    pin: Option<u32>,
    amount: Option<String>,
}

/// Reads user intents from a CSV reader.
///
/// Supported headers: `action,handle,pin,amount`.
/// `action` is trimmed and matched case-insensitively. `login` and `close`
/// need `handle` and `pin`, `transfer` needs `handle` (the receiver) and
/// `amount`, `loan` needs `amount`. Errors carry the 1-based row number.
///
/// # Examples
///
/// ```
/// use bankist_ledger::io::reader::read_intents;
/// use bankist_ledger::common::event::Intent;
/// use csv::ReaderBuilder;
///
/// let data = "action,handle,pin,amount\n\
/// login,js,1111,\n\
/// sort,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let intents: Vec<_> = read_intents(&mut rdr).collect();
///
/// assert!(matches!(&intents[0], Ok(Intent::Login { pin: 1111, .. })));
/// assert!(matches!(intents[1], Ok(Intent::Sort)));
/// ```
pub fn read_intents<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Intent, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(i, res)| {
            res.map_err(|e| e.to_string())
                .and_then(|row| parse_row(i + 1, row))
        })
}

fn parse_row(row_no: usize, row: CsvRow) -> Result<Intent, String> {
    let kind = row.action.trim().to_ascii_lowercase();
    let missing = |field: &str| format!("{kind} missing {field} on row {row_no}");
    let handle = |handle: Option<String>| {
        handle
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| missing("handle"))
    };
    let amount = |amount: Option<String>| -> Result<Money, String> {
        let raw = amount.ok_or_else(|| missing("amount"))?;
        Money::from_str(&raw).map_err(|e| format!("{e} on row {row_no}"))
    };

    match kind.as_str() {
        "login" => Ok(Intent::Login {
            handle: handle(row.handle)?,
            pin: row.pin.ok_or_else(|| missing("pin"))?,
        }),
        "transfer" => Ok(Intent::Transfer {
            to: handle(row.handle)?,
            amount: amount(row.amount)?,
        }),
        "loan" => Ok(Intent::Loan {
            amount: amount(row.amount)?,
        }),
        "close" => Ok(Intent::Close {
            handle: handle(row.handle)?,
            pin: row.pin.ok_or_else(|| missing("pin"))?,
        }),
        "sort" => Ok(Intent::Sort),
        "logout" => Ok(Intent::Logout),
        other => Err(format!("unknown action: {other} on row {row_no}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    // Helper: parse CSV input into collected intents for assertions.
    fn collect_intents(input: &str) -> Vec<Result<Intent, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_intents(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_actions() {
        let data = "action,handle,pin,amount\n\
LOGIN,js,1111,\ntransfer,jd,,100.5\nloan,,,2000\nclose,js,1111,\nsort,,,\nlogout,,,\n";
        let intents = collect_intents(data);

        assert_eq!(
            intents,
            vec![
                Ok(Intent::Login {
                    handle: "js".to_string(),
                    pin: 1111
                }),
                Ok(Intent::Transfer {
                    to: "jd".to_string(),
                    amount: Money::from_str("100.5").unwrap()
                }),
                Ok(Intent::Loan {
                    amount: Money::from_units(2000)
                }),
                Ok(Intent::Close {
                    handle: "js".to_string(),
                    pin: 1111
                }),
                Ok(Intent::Sort),
                Ok(Intent::Logout),
            ]
        );
    }

    #[test]
    fn reports_missing_fields_with_row_number() {
        let data = "action,handle,pin,amount\n\
sort,,,\nlogin,js,,\ntransfer,,,10\nloan,,,\n";
        let intents = collect_intents(data);

        assert_eq!(intents.len(), 4);
        assert_eq!(intents[1], Err("login missing pin on row 2".to_string()));
        assert_eq!(intents[2], Err("transfer missing handle on row 3".to_string()));
        assert_eq!(intents[3], Err("loan missing amount on row 4".to_string()));
    }

    #[test]
    fn reports_unknown_action_error() {
        let data = "action,handle,pin,amount\n\nrefund,js,,10\n";
        let intents = collect_intents(data);

        assert_eq!(intents.len(), 1);
        let err = intents.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "unknown action: refund on row 1");
    }

    #[test]
    fn rejects_non_numeric_pin() {
        let intents = collect_intents("action,handle,pin,amount\nlogin,js,abcd,\n");
        assert!(intents[0].is_err());
    }
}
