use std::io::{stdout, BufWriter};

use crate::{
    common::error::AppError,
    domain::bank::Bank,
    io::{reader, writer},
    worker::processor::Processor,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];
    let statement = args[2..].iter().any(|a| a == "--statement");

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let intents = reader::read_intents(&mut reader);

    let mut bank = Bank::seeded()?;
    let mut processor = Processor::new();

    let (mut applied, mut declined) = (0usize, 0usize);
    for intent in intents {
        let intent = intent.map_err(AppError::Parse)?;
        if processor.process(&mut bank, intent).is_applied() {
            applied += 1;
        } else {
            declined += 1;
        }
    }
    tracing::debug!(
        applied,
        declined,
        accounts = bank.directory.len(),
        overall = %bank.directory.overall_balance(),
        "intents processed"
    );

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    if statement {
        let lines = bank
            .session
            .current(&bank.directory)
            .map(|acc| acc.statement(bank.session.is_sorted()))
            .unwrap_or_default();
        writer::write_statement(out, &lines)?;
    } else {
        writer::write_accounts(out, bank.directory.accounts())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_without_input_path_fails() {
        assert!(matches!(run(["bankist_ledger"]), Err(AppError::MissingArg)));
    }

    #[test]
    fn run_with_missing_file_fails_to_open() {
        let res = run(["bankist_ledger", "does/not/exist.csv"]);
        assert!(matches!(res, Err(AppError::OpenInput(_))));
    }
}
