use std::io::{self, BufRead, Write};

use fractic_server_error::ServerError;

use crate::{entities::Debt, errors::TerminalIoError, presentation::utils::format_amount};

pub trait Confirmation {
    fn confirm(&mut self, question: &str) -> Result<bool, ServerError>;
}

/// Asks on a terminal; only "y"/"yes" (any case) counts as consent, so an
/// empty line or end of input declines.
pub struct TerminalConfirmation<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalConfirmation<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirmation for TerminalConfirmation<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, ServerError> {
        write!(self.output, "{} [y/N] ", question).map_err(|e| TerminalIoError::with_debug(&e))?;
        self.output.flush().map_err(|e| TerminalIoError::with_debug(&e))?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(|e| TerminalIoError::with_debug(&e))?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Consents to everything (`--yes`).
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool, ServerError> {
        Ok(true)
    }
}

pub(crate) fn removal_question(debt: &Debt, currency: iso_currency::Currency) -> String {
    format!(
        "Delete the record for {} ({}, {})? This cannot be undone.",
        debt.contact_name(),
        debt.debt_type().label(),
        format_amount(debt.amount(), currency),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = TerminalConfirmation::new(Cursor::new(input.as_bytes()), &mut output)
            .confirm("Delete?")
            .unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_only_explicit_yes() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  yes  \n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
        assert!(!ask("yep\n").0);
    }

    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn unwritable_prompt_is_an_error_and_reads_nothing() {
        let mut input = Cursor::new(&b"y\n"[..]);
        let result = TerminalConfirmation::new(&mut input, BrokenOutput).confirm("Delete?");
        assert!(result.is_err());
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn prints_question() {
        assert_eq!(ask("n\n").1, "Delete? [y/N] ");
    }
}
