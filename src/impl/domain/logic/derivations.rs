use crate::entities::{ActiveTab, DashboardStats, Debt, DebtType};

pub fn compute_stats(debts: &[Debt]) -> DashboardStats {
    let (total_lent, total_borrowed) = debts
        .iter()
        .filter(|d| d.is_pending())
        .fold((0.0, 0.0), |(lent, borrowed), d| match d.debt_type {
            DebtType::Lent => (lent + d.amount, borrowed),
            DebtType::Borrowed => (lent, borrowed + d.amount),
        });
    DashboardStats {
        total_lent,
        total_borrowed,
        balance: total_lent - total_borrowed,
    }
}

/// Records for the given tab, newest date first.
///
/// The sort is stable, so records sharing a date keep their collection order
/// (most recently added first).
pub fn filtered_view(debts: &[Debt], tab: ActiveTab) -> Vec<&Debt> {
    let mut sorted: Vec<&Debt> = debts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    match tab.type_filter() {
        Some(t) => sorted.into_iter().filter(|d| d.debt_type == t).collect(),
        None => sorted,
    }
}
