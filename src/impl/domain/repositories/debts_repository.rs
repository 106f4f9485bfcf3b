use fractic_server_error::ServerError;

use crate::entities::Debt;

pub trait DebtsRepository {
    /// Loads the persisted collection. A missing store yields an empty one.
    fn load(&self) -> Result<Vec<Debt>, ServerError>;

    /// Replaces the persisted collection with `debts`.
    fn save(&self, debts: &[Debt]) -> Result<(), ServerError>;
}
