//! Ledger transactions: rent received, repairs paid, taxes, ...
//!
//! Amounts are always stored positive; [`TransactionKind`] carries the sign.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, Money, util::string_enum};

string_enum! {
    pub enum TransactionKind {
        Income => "income",
        Expense => "expense",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub tenant_id: Option<Uuid>,
    pub bank_account_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub occurred_on: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with the sign implied by the kind (expenses are negative).
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub tenant_id: Option<Uuid>,
    pub bank_account_id: Option<Uuid>,
    pub kind: String,
    pub category: String,
    pub amount: i64,
    pub occurred_on: Date,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            property_id: model.property_id,
            tenant_id: model.tenant_id,
            bank_account_id: model.bank_account_id,
            kind: TransactionKind::try_from(model.kind.as_str())?,
            category: model.category,
            amount: Money::new(model.amount),
            occurred_on: model.occurred_on,
            description: model.description,
            created_at: model.created_at,
        })
    }
}
