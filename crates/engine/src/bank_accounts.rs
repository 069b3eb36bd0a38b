//! Bank accounts used to collect rent and pay expenses.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, Money, util::string_enum};

string_enum! {
    pub enum AccountType {
        Checking => "checking",
        Savings => "savings",
        Credit => "credit",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankAccount {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub institution: Option<String>,
    pub account_type: AccountType,
    /// Last four digits of the account number, never the full number.
    pub last_four: Option<String>,
    pub balance: Money,
    pub property_id: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bank_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub institution: Option<String>,
    pub account_type: String,
    pub last_four: Option<String>,
    pub balance: i64,
    pub property_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for BankAccount {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            institution: model.institution,
            account_type: AccountType::try_from(model.account_type.as_str())?,
            last_four: model.last_four,
            balance: Money::new(model.balance),
            property_id: model.property_id,
        })
    }
}
