use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    BudgetEntry, BudgetEntryNew, BudgetLine, EngineError, Money, ResultEngine, TransactionKind,
    budget, transactions,
    util::{add_to_total, normalize_required, require_non_negative},
};

use super::Engine;

/// First and last day of a calendar month.
fn month_bounds(year: i32, month: u32) -> ResultEngine<(NaiveDate, NaiveDate)> {
    let invalid = || EngineError::InvalidDate(format!("invalid month {year}-{month}"));
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next.pred_opt().ok_or_else(invalid)?;
    Ok((first, last))
}

impl Engine {
    pub async fn create_budget_entry(
        &self,
        user_id: &str,
        cmd: BudgetEntryNew,
    ) -> ResultEngine<BudgetEntry> {
        let category = normalize_required(&cmd.category, "category")?.to_lowercase();
        require_non_negative(cmd.planned_amount, "planned amount")?;
        month_bounds(cmd.year, cmd.month)?;
        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;

        let model = budget::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            category: ActiveValue::Set(category),
            year: ActiveValue::Set(cmd.year),
            month: ActiveValue::Set(cmd.month as i32),
            planned_amount: ActiveValue::Set(cmd.planned_amount.cents()),
        }
        .insert(&self.database)
        .await?;

        Ok(model.into())
    }

    pub async fn list_budget_entries(
        &self,
        user_id: &str,
        year: i32,
        month: Option<u32>,
    ) -> ResultEngine<Vec<BudgetEntry>> {
        let mut query = budget::Entity::find()
            .filter(budget::Column::UserId.eq(user_id.to_string()))
            .filter(budget::Column::Year.eq(year));
        if let Some(month) = month {
            query = query.filter(budget::Column::Month.eq(month as i32));
        }
        Ok(query
            .order_by_asc(budget::Column::Month)
            .order_by_asc(budget::Column::Category)
            .all(&self.database)
            .await?
            .into_iter()
            .map(BudgetEntry::from)
            .collect())
    }

    pub async fn delete_budget_entry(&self, user_id: &str, entry_id: Uuid) -> ResultEngine<()> {
        let res = budget::Entity::delete_many()
            .filter(budget::Column::Id.eq(entry_id))
            .filter(budget::Column::UserId.eq(user_id.to_string()))
            .exec(&self.database)
            .await?;
        if res.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("budget entry not exists".to_string()));
        }
        Ok(())
    }

    /// Planned vs. actual expenses per category for one month.
    ///
    /// Categories with spending but no plan appear with a zero plan.
    pub async fn budget_report(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> ResultEngine<Vec<BudgetLine>> {
        let (first, last) = month_bounds(year, month)?;
        let mut lines: BTreeMap<String, (Money, Money)> = BTreeMap::new();

        for entry in self.list_budget_entries(user_id, year, Some(month)).await? {
            let line = lines.entry(entry.category).or_default();
            add_to_total(&mut line.0, entry.planned_amount, "planned")?;
        }

        let expenses = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.to_string()))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .filter(transactions::Column::OccurredOn.between(first, last))
            .all(&self.database)
            .await?;
        for tx in expenses {
            let line = lines.entry(tx.category).or_default();
            add_to_total(&mut line.1, Money::new(tx.amount), "expense")?;
        }

        Ok(lines
            .into_iter()
            .map(|(category, (planned, actual))| BudgetLine {
                category,
                planned,
                actual,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_handle_december_and_leap_years() {
        let (first, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, last) = month_bounds(2023, 12).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn month_bounds_reject_out_of_range() {
        assert!(month_bounds(2024, 0).is_err());
        assert!(month_bounds(2024, 13).is_err());
    }
}
