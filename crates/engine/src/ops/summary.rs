use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{PaginatorTrait, QueryFilter, prelude::*};

use crate::{
    MaintenanceStatus, Money, PropertyStatus, ResultEngine, TenantStatus, TransactionKind,
    maintenance, properties, tenants, transactions, util::add_to_total,
};

use super::Engine;

/// Dashboard numbers for one user.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioSummary {
    pub property_count: u64,
    pub occupied_count: u64,
    /// Percent of properties occupied, 0 with no properties.
    pub occupancy_rate_percent: f64,
    pub scheduled_monthly_rent: Money,
    pub active_tenant_count: u64,
    pub open_maintenance_count: u64,
    pub year_income: Money,
    pub year_expenses: Money,
}

impl PortfolioSummary {
    /// Both totals are non-negative sums, so the difference cannot overflow.
    pub fn year_net(&self) -> Money {
        self.year_income - self.year_expenses
    }
}

impl Engine {
    /// Summary for the current calendar year.
    pub async fn portfolio_summary(&self, user_id: &str) -> ResultEngine<PortfolioSummary> {
        self.portfolio_summary_for_year(user_id, Utc::now().year())
            .await
    }

    pub async fn portfolio_summary_for_year(
        &self,
        user_id: &str,
        year: i32,
    ) -> ResultEngine<PortfolioSummary> {
        let properties = properties::Entity::find()
            .filter(properties::Column::UserId.eq(user_id.to_string()))
            .all(&self.database)
            .await?;
        let property_count = properties.len() as u64;
        let occupied_count = properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Occupied.as_str())
            .count() as u64;
        let mut scheduled_monthly_rent = Money::ZERO;
        for property in &properties {
            add_to_total(
                &mut scheduled_monthly_rent,
                Money::new(property.monthly_rent),
                "scheduled rent",
            )?;
        }

        let active_tenant_count = tenants::Entity::find()
            .filter(tenants::Column::UserId.eq(user_id.to_string()))
            .filter(tenants::Column::Status.is_in([
                TenantStatus::Active.as_str(),
                TenantStatus::Notice.as_str(),
            ]))
            .count(&self.database)
            .await?;

        let open_maintenance_count = maintenance::Entity::find()
            .filter(maintenance::Column::UserId.eq(user_id.to_string()))
            .filter(maintenance::Column::Status.is_in([
                MaintenanceStatus::Open.as_str(),
                MaintenanceStatus::InProgress.as_str(),
            ]))
            .count(&self.database)
            .await?;

        let mut year_income = Money::ZERO;
        let mut year_expenses = Money::ZERO;
        if let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) {
            let rows = transactions::Entity::find()
                .filter(transactions::Column::UserId.eq(user_id.to_string()))
                .filter(transactions::Column::OccurredOn.between(first, last))
                .all(&self.database)
                .await?;
            for row in rows {
                let amount = Money::new(row.amount);
                match TransactionKind::try_from(row.kind.as_str())? {
                    TransactionKind::Income => add_to_total(&mut year_income, amount, "income")?,
                    TransactionKind::Expense => {
                        add_to_total(&mut year_expenses, amount, "expense")?
                    }
                }
            }
        }

        let occupancy_rate_percent = if property_count == 0 {
            0.0
        } else {
            occupied_count as f64 / property_count as f64 * 100.0
        };

        Ok(PortfolioSummary {
            property_count,
            occupied_count,
            occupancy_rate_percent,
            scheduled_monthly_rent,
            active_tenant_count,
            open_maintenance_count,
            year_income,
            year_expenses,
        })
    }
}
