use super::debt::DebtType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    All,
    Lent,
    Borrowed,
    Advisor,
}

impl ActiveTab {
    /// The record type this tab restricts the list to, if any. The advisor
    /// tab has no list, so it filters nothing.
    pub fn type_filter(&self) -> Option<DebtType> {
        match self {
            ActiveTab::Lent => Some(DebtType::Lent),
            ActiveTab::Borrowed => Some(DebtType::Borrowed),
            ActiveTab::All | ActiveTab::Advisor => None,
        }
    }
}
