use std::path::Path;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    config::Config,
    data::{
        datasources::gemini_datasource::GeminiDatasourceImpl,
        repositories::{
            advice_repository_impl::AdviceRepositoryImpl,
            debts_repository_impl::DebtsRepositoryImpl,
        },
    },
    domain::usecases::{
        advice_usecase::AdviceUsecaseImpl,
        debt_store::DebtStore,
    },
    entities::{ActiveTab, DashboardStats, Debt, DebtForm, DebtId},
    presentation::{
        advisor_panel::AdvisorPanel,
        confirmation::{removal_question, Confirmation},
        debt_list_printer::DebtListPrinter,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Declined,
    NotFound,
}

/// Wires the file-backed store, the advisor and the printers together.
pub struct DebtTrackerUtil {
    store: DebtStore<DebtsRepositoryImpl>,
    advice_usecase: AdviceUsecaseImpl,
    currency: Currency,
}

impl DebtTrackerUtil {
    /// Opens the store at `config.storage_path()` unless `storage_path`
    /// overrides it.
    pub fn open(
        config: &Config,
        storage_path: Option<&Path>,
        api_key: Option<String>,
    ) -> Result<Self, ServerError> {
        let currency = config.currency()?;
        let path = storage_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.storage_path());
        let store = DebtStore::open(DebtsRepositoryImpl::new(path))?;
        let datasource = GeminiDatasourceImpl::new(
            config.advice.endpoint.clone(),
            config.advice.model.clone(),
            config.advice.timeout(),
            api_key,
        )?;
        Ok(Self {
            store,
            advice_usecase: AdviceUsecaseImpl::new(AdviceRepositoryImpl::new(datasource, currency)),
            currency,
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn debts(&self) -> &[Debt] {
        self.store.debts()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Debt]) + 'static) {
        self.store.subscribe(listener);
    }

    pub fn submit(&mut self, form: DebtForm) -> Result<Option<DebtId>, ServerError> {
        self.store.submit(form)
    }

    pub fn toggle_status(&mut self, id: &DebtId) -> Result<bool, ServerError> {
        self.store.toggle_status(id)
    }

    /// Asks `confirmation` before deleting.
    pub fn remove(
        &mut self,
        id: &DebtId,
        confirmation: &mut dyn Confirmation,
    ) -> Result<RemoveOutcome, ServerError> {
        let Some(debt) = self.store.get(id) else {
            return Ok(RemoveOutcome::NotFound);
        };
        if !confirmation.confirm(&removal_question(debt, self.currency))? {
            return Ok(RemoveOutcome::Declined);
        }
        self.store.remove(id)?;
        Ok(RemoveOutcome::Removed)
    }

    pub fn stats(&self) -> DashboardStats {
        self.store.stats()
    }

    pub fn printer(&self) -> DebtListPrinter {
        DebtListPrinter::new(self.currency)
    }

    pub fn render_dashboard(&self) -> String {
        self.printer().print_dashboard(&self.stats())
    }

    pub fn render_list(&self, tab: ActiveTab) -> String {
        self.printer()
            .print_list_view(&self.stats(), &self.store.view(tab), tab)
    }

    /// Runs one advice request through `panel`, handing it to `on_loading`
    /// while the request is in flight. Returns `false` if the panel already
    /// had a request outstanding.
    pub async fn request_advice(
        &self,
        panel: &mut AdvisorPanel,
        on_loading: impl FnOnce(&AdvisorPanel),
    ) -> bool {
        panel
            .fetch(&self.advice_usecase, self.store.debts(), on_loading)
            .await
    }
}
