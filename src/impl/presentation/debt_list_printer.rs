use iso_currency::Currency;

use crate::{
    entities::{ActiveTab, DashboardStats, Debt},
    presentation::utils::format_amount,
};

pub const EMPTY_STATE: &str = "The list is empty.";
pub const EMPTY_STATE_ACTION: &str =
    "Add your first transaction: debts add --name <NAME> --amount <AMOUNT> [--type lent|borrowed]";

const LIST_TABS: [ActiveTab; 3] = [ActiveTab::All, ActiveTab::Lent, ActiveTab::Borrowed];

/// Renders the list surface: dashboard, tab selector and the records of the
/// active tab (or the empty-state prompt).
pub struct DebtListPrinter {
    currency: Currency,
}

impl DebtListPrinter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn print_dashboard(&self, stats: &DashboardStats) -> String {
        let mut output = String::new();
        for (label, amount) in [
            ("Balance", stats.balance),
            ("Owed to me", stats.total_lent),
            ("I owe", stats.total_borrowed),
        ] {
            output.push_str(&format!(
                "{:12} {:>22}\n",
                label,
                format_amount(amount, self.currency)
            ));
        }
        output
    }

    /// `view` is expected to be the derived view for `tab` (already filtered
    /// and sorted).
    pub fn print_list_view(&self, stats: &DashboardStats, view: &[&Debt], tab: ActiveTab) -> String {
        let mut output = self.print_dashboard(stats);
        output.push('\n');
        self.print_tabs(&mut output, tab);
        output.push('\n');
        if view.is_empty() {
            output.push_str(EMPTY_STATE);
            output.push('\n');
            output.push_str(EMPTY_STATE_ACTION);
            output.push('\n');
            return output;
        }
        for debt in view {
            self.print_debt(&mut output, debt);
        }
        output
    }

    fn print_tabs(&self, output: &mut String, active: ActiveTab) {
        let tabs: Vec<String> = LIST_TABS
            .iter()
            .map(|t| {
                if *t == active {
                    format!("[{}]", t.label())
                } else {
                    format!(" {} ", t.label())
                }
            })
            .collect();
        output.push_str(&tabs.join(" "));
        output.push('\n');
    }

    fn print_debt(&self, output: &mut String, debt: &Debt) {
        output.push_str(&format!(
            "{}  {:24} {:10} {:>18}  {:7}  #{}\n",
            debt.date(),
            debt.contact_name(),
            debt.debt_type().label(),
            format_amount(debt.amount(), self.currency),
            debt.status().label(),
            debt.id(),
        ));
        if !debt.notes().is_empty() {
            for line in textwrap::wrap(debt.notes(), 68) {
                output.push_str(&format!("            ; {}\n", line));
            }
        }
    }
}
