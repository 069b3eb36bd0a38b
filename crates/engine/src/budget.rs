//! Monthly budget lines, compared against recorded expenses.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::Money;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetEntry {
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub category: String,
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub planned_amount: Money,
}

/// Planned vs. actual spend for one category in one month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetLine {
    pub category: String,
    pub planned: Money,
    pub actual: Money,
}

impl BudgetLine {
    /// Positive when under budget.
    pub fn remaining(&self) -> Money {
        self.planned - self.actual
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "budget_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub category: String,
    pub year: i32,
    pub month: i32,
    pub planned_amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BudgetEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            property_id: model.property_id,
            category: model.category,
            year: model.year,
            month: model.month.clamp(1, 12) as u32,
            planned_amount: Money::new(model.planned_amount),
        }
    }
}
