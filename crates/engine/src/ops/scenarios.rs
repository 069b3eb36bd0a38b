use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ProformaScenario, ResultEngine, ScenarioAnalysis, ScenarioNew, scenarios,
    util::{normalize_required, require_non_negative, require_percent, require_positive},
};

use super::Engine;

const MAX_LOAN_TERM_YEARS: i32 = 50;

impl Engine {
    pub async fn create_scenario(
        &self,
        user_id: &str,
        cmd: ScenarioNew,
    ) -> ResultEngine<ProformaScenario> {
        let name = normalize_required(&cmd.name, "scenario name")?;
        require_positive(cmd.purchase_price, "purchase price")?;
        require_non_negative(cmd.monthly_rent, "monthly rent")?;
        require_non_negative(cmd.monthly_expenses, "monthly expenses")?;
        require_non_negative(cmd.closing_costs, "closing costs")?;
        require_percent(cmd.down_payment_percent, "down payment")?;
        require_percent(cmd.interest_rate_percent, "interest rate")?;
        require_percent(cmd.vacancy_rate_percent, "vacancy rate")?;
        if !(1..=MAX_LOAN_TERM_YEARS).contains(&cmd.loan_term_years) {
            return Err(EngineError::InvalidAmount(format!(
                "loan term must be between 1 and {MAX_LOAN_TERM_YEARS} years"
            )));
        }
        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;

        let model = scenarios::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            name: ActiveValue::Set(name),
            purchase_price: ActiveValue::Set(cmd.purchase_price.cents()),
            down_payment_percent: ActiveValue::Set(cmd.down_payment_percent),
            interest_rate_percent: ActiveValue::Set(cmd.interest_rate_percent),
            loan_term_years: ActiveValue::Set(cmd.loan_term_years),
            monthly_rent: ActiveValue::Set(cmd.monthly_rent.cents()),
            vacancy_rate_percent: ActiveValue::Set(cmd.vacancy_rate_percent),
            monthly_expenses: ActiveValue::Set(cmd.monthly_expenses.cents()),
            closing_costs: ActiveValue::Set(cmd.closing_costs.cents()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.database)
        .await?;

        ProformaScenario::try_from(model)
    }

    pub async fn list_scenarios(&self, user_id: &str) -> ResultEngine<Vec<ProformaScenario>> {
        scenarios::Entity::find()
            .filter(scenarios::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(scenarios::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(ProformaScenario::try_from)
            .collect()
    }

    pub async fn scenario(&self, user_id: &str, scenario_id: Uuid) -> ResultEngine<ProformaScenario> {
        let model = self
            .require_scenario(&self.database, user_id, scenario_id)
            .await?;
        ProformaScenario::try_from(model)
    }

    pub async fn analyze_scenario(
        &self,
        user_id: &str,
        scenario_id: Uuid,
    ) -> ResultEngine<ScenarioAnalysis> {
        Ok(self.scenario(user_id, scenario_id).await?.analyze())
    }

    pub async fn delete_scenario(&self, user_id: &str, scenario_id: Uuid) -> ResultEngine<()> {
        self.require_scenario(&self.database, user_id, scenario_id)
            .await?;
        scenarios::Entity::delete_by_id(scenario_id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
