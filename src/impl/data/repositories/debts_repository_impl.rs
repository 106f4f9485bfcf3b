use std::path::PathBuf;

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::debts_json_datasource::{DebtsJsonDatasource, DebtsJsonDatasourceImpl},
        models::debt_model::DebtModel,
    },
    domain::repositories::debts_repository::DebtsRepository,
    entities::Debt,
};

pub(crate) struct DebtsRepositoryImpl<DS = DebtsJsonDatasourceImpl>
where
    DS: DebtsJsonDatasource,
{
    datasource: DS,
}

impl<DS> DebtsRepository for DebtsRepositoryImpl<DS>
where
    DS: DebtsJsonDatasource,
{
    fn load(&self) -> Result<Vec<Debt>, ServerError> {
        self.datasource
            .read()?
            .unwrap_or_default()
            .into_iter()
            .map(Debt::try_from)
            .collect()
    }

    fn save(&self, debts: &[Debt]) -> Result<(), ServerError> {
        let models: Vec<DebtModel> = debts.iter().map(DebtModel::from).collect();
        self.datasource.write(&models)
    }
}

impl DebtsRepositoryImpl {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        DebtsRepositoryImpl {
            datasource: DebtsJsonDatasourceImpl::new(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::entities::debt::test_utils::debt;
    use crate::entities::{DebtStatus, DebtType};

    #[test]
    fn save_then_load_keeps_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DebtsRepositoryImpl::new(dir.path().join("wb_debts.json"));
        let debts = vec![
            debt("2", DebtType::Borrowed, 40.0, DebtStatus::Pending, (2026, 2, 1)),
            debt("1", DebtType::Lent, 100.0, DebtStatus::Paid, (2026, 1, 1)),
        ];
        repo.save(&debts).unwrap();
        assert_eq!(repo.load().unwrap(), debts);
    }

    #[test]
    fn bad_record_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wb_debts.json");
        fs::write(
            &path,
            r#"[{"id":"1","contactName":"A","amount":-1,"type":"LENT","date":"2026-01-01","notes":"","status":"PENDING"}]"#,
        )
        .unwrap();
        assert!(DebtsRepositoryImpl::new(&path).load().is_err());
    }
}
