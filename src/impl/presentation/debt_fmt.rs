use crate::entities::{ActiveTab, DebtStatus, DebtType};

impl DebtType {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            DebtType::Lent => "owed to me",
            DebtType::Borrowed => "I owe",
        }
    }
}

impl DebtStatus {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            DebtStatus::Pending => "pending",
            DebtStatus::Paid => "paid",
        }
    }
}

impl ActiveTab {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            ActiveTab::All => "All",
            ActiveTab::Lent => "Owed to me",
            ActiveTab::Borrowed => "I owe",
            ActiveTab::Advisor => "Advisor",
        }
    }
}
