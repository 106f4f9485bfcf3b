use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DebtId(pub(crate) String);

impl DebtId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub(crate) fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DebtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of a debt, seen from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebtType {
    /// The counterparty owes the user.
    Lent,
    /// The user owes the counterparty.
    Borrowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebtStatus {
    Pending,
    Paid,
}

impl DebtStatus {
    pub fn toggled(self) -> Self {
        match self {
            DebtStatus::Pending => DebtStatus::Paid,
            DebtStatus::Paid => DebtStatus::Pending,
        }
    }
}

/// A single lent/borrowed transaction between the user and a named contact.
///
/// Everything except the status is fixed at creation. Status changes go
/// through the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    pub(crate) id: DebtId,
    pub(crate) contact_name: String,
    pub(crate) amount: f64,
    pub(crate) debt_type: DebtType,
    pub(crate) date: NaiveDate,
    pub(crate) due_date: Option<String>,
    pub(crate) notes: String,
    pub(crate) status: DebtStatus,
}

impl Debt {
    pub fn id(&self) -> &DebtId {
        &self.id
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn debt_type(&self) -> DebtType {
        self.debt_type
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn status(&self) -> DebtStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == DebtStatus::Pending
    }
}
