use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Debt;

#[async_trait]
pub trait AdviceRepository: Send + Sync {
    async fn advice_for(&self, debts: &[Debt]) -> Result<String, ServerError>;
}
