use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::{Debt, DebtForm, DebtId, DebtStatus},
    errors::InvalidAmount,
};

pub(crate) struct FormProcessor {
    form: DebtForm,
}

impl FormProcessor {
    pub(crate) fn new(form: DebtForm) -> Self {
        Self { form }
    }

    /// Builds a pending record from the form.
    ///
    /// Returns `Ok(None)` when the name or amount is missing; such submissions
    /// are dropped without an error. An amount that is present but not a
    /// non-negative number is an error.
    pub(crate) fn process(self, id: DebtId, date: NaiveDate) -> Result<Option<Debt>, ServerError> {
        let DebtForm {
            contact_name,
            amount,
            debt_type,
            notes,
        } = self.form;

        let contact_name = non_blank(contact_name);
        let raw_amount = non_blank(amount);
        let (contact_name, raw_amount) = match (contact_name, raw_amount) {
            (Some(n), Some(a)) => (n, a),
            _ => {
                debug!("ignoring submission without a contact name or amount");
                return Ok(None);
            }
        };

        Ok(Some(Debt {
            id,
            contact_name,
            amount: parse_amount(&raw_amount)?,
            debt_type,
            date,
            due_date: None,
            notes: notes.unwrap_or_default(),
            status: DebtStatus::Pending,
        }))
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Accepts plain decimal input with optional thousands separators
/// (ex. "1,250.5").
pub(crate) fn parse_amount(s: &str) -> Result<f64, ServerError> {
    let raw = s.replace(',', "");
    let amount = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidAmount::new(s))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(InvalidAmount::new(s));
    }
    Ok(amount)
}
