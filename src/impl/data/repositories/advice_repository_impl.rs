use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};
use iso_currency::Currency;

use crate::{
    data::{
        datasources::gemini_datasource::{GeminiDatasourceImpl, TextGenerationDatasource},
        models::debt_model::DebtModel,
    },
    domain::repositories::advice_repository::AdviceRepository,
    entities::Debt,
};

pub(crate) struct AdviceRepositoryImpl<DS = GeminiDatasourceImpl>
where
    DS: TextGenerationDatasource,
{
    datasource: DS,
    currency: Currency,
}

impl<DS> AdviceRepositoryImpl<DS>
where
    DS: TextGenerationDatasource,
{
    pub(crate) fn new(datasource: DS, currency: Currency) -> Self {
        Self {
            datasource,
            currency,
        }
    }

    fn build_prompt(&self, debts: &[Debt]) -> Result<String, ServerError> {
        let models: Vec<DebtModel> = debts.iter().map(DebtModel::from).collect();
        let records = serde_json::to_string_pretty(&models)
            .map_err(|e| CriticalError::with_debug("failed to serialize debts for prompt", &e))?;
        Ok(format!(
            "You are a personal financial advisor. Below are my recorded debts as JSON. \
             Amounts are in {code}. type LENT means the contact owes me; type BORROWED \
             means I owe the contact. Only PENDING records are still open.\n\
             Analyse them and give me a short, practical strategy for settling what I owe, \
             collecting what I am owed, and saving money. Answer in under 150 words.\n\n\
             Records:\n{records}\n",
            code = self.currency.code(),
            records = records,
        ))
    }
}

#[async_trait]
impl<DS> AdviceRepository for AdviceRepositoryImpl<DS>
where
    DS: TextGenerationDatasource,
{
    async fn advice_for(&self, debts: &[Debt]) -> Result<String, ServerError> {
        let prompt = self.build_prompt(debts)?;
        self.datasource.generate(&prompt).await
    }
}
