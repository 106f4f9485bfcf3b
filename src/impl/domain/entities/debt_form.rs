use super::debt::DebtType;

/// Raw input of the creation form, before validation.
#[derive(Debug, Clone)]
pub struct DebtForm {
    pub contact_name: Option<String>,
    pub amount: Option<String>,
    pub debt_type: DebtType,
    pub notes: Option<String>,
}

impl Default for DebtForm {
    fn default() -> Self {
        Self {
            contact_name: None,
            amount: None,
            // Matches the form's preselected option.
            debt_type: DebtType::Borrowed,
            notes: None,
        }
    }
}
