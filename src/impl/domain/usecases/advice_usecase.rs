use std::time::Instant;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::advice_repository_impl::AdviceRepositoryImpl,
    domain::repositories::advice_repository::AdviceRepository,
    entities::Debt,
};

#[async_trait]
pub trait AdviceUsecase: Send + Sync {
    /// Sends the whole collection to the advisor and waits for a single text
    /// answer. No retries.
    async fn fetch_advice(&self, debts: &[Debt]) -> Result<String, ServerError>;
}

pub(crate) struct AdviceUsecaseImpl<
    R1 = AdviceRepositoryImpl, // Default.
> where
    R1: AdviceRepository,
{
    advice_repository: R1,
}

#[async_trait]
impl<R1> AdviceUsecase for AdviceUsecaseImpl<R1>
where
    R1: AdviceRepository,
{
    async fn fetch_advice(&self, debts: &[Debt]) -> Result<String, ServerError> {
        let started = Instant::now();
        let advice = self.advice_repository.advice_for(debts).await?;
        info!(
            records = debts.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received financial advice"
        );
        Ok(advice)
    }
}

impl<R1: AdviceRepository> AdviceUsecaseImpl<R1> {
    pub(crate) fn new(advice_repository: R1) -> Self {
        AdviceUsecaseImpl { advice_repository }
    }
}
