use fractic_server_error::ServerError;
use serde_derive::{Deserialize, Serialize};

use crate::{
    data::models::iso_date_model::ISODateModel,
    entities::{Debt, DebtId, DebtStatus, DebtType},
    errors::NegativeAmount,
};

/// Persisted shape of a record. Field names and enum spellings follow the
/// stored JSON (`contactName`, `"LENT"`, `"PENDING"`, ...).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DebtModel {
    pub id: String,
    pub contact_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub debt_type: DebtTypeModel,
    pub date: ISODateModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub status: DebtStatusModel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum DebtTypeModel {
    Lent,
    Borrowed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum DebtStatusModel {
    Pending,
    Paid,
}

impl From<DebtTypeModel> for DebtType {
    fn from(m: DebtTypeModel) -> Self {
        match m {
            DebtTypeModel::Lent => DebtType::Lent,
            DebtTypeModel::Borrowed => DebtType::Borrowed,
        }
    }
}

impl From<DebtType> for DebtTypeModel {
    fn from(t: DebtType) -> Self {
        match t {
            DebtType::Lent => DebtTypeModel::Lent,
            DebtType::Borrowed => DebtTypeModel::Borrowed,
        }
    }
}

impl From<DebtStatusModel> for DebtStatus {
    fn from(m: DebtStatusModel) -> Self {
        match m {
            DebtStatusModel::Pending => DebtStatus::Pending,
            DebtStatusModel::Paid => DebtStatus::Paid,
        }
    }
}

impl From<DebtStatus> for DebtStatusModel {
    fn from(s: DebtStatus) -> Self {
        match s {
            DebtStatus::Pending => DebtStatusModel::Pending,
            DebtStatus::Paid => DebtStatusModel::Paid,
        }
    }
}

impl TryFrom<DebtModel> for Debt {
    type Error = ServerError;

    fn try_from(m: DebtModel) -> Result<Self, Self::Error> {
        if m.amount < 0.0 {
            return Err(NegativeAmount::new(&m.id, m.amount));
        }
        Ok(Debt {
            id: DebtId(m.id),
            contact_name: m.contact_name,
            amount: m.amount,
            debt_type: m.debt_type.into(),
            date: m.date.into(),
            due_date: m.due_date,
            notes: m.notes,
            status: m.status.into(),
        })
    }
}

impl From<&Debt> for DebtModel {
    fn from(d: &Debt) -> Self {
        DebtModel {
            id: d.id.0.clone(),
            contact_name: d.contact_name.clone(),
            amount: d.amount,
            debt_type: d.debt_type.into(),
            date: d.date.into(),
            due_date: d.due_date.clone(),
            notes: d.notes.clone(),
            status: d.status.into(),
        }
    }
}
