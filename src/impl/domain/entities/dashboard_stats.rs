/// Aggregates over pending records. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub total_lent: f64,
    pub total_borrowed: f64,
    pub balance: f64,
}
