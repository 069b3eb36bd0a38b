//! Pro-forma scenarios: "what if I buy this property with these terms".
//!
//! [`ProformaScenario::analyze`] derives the usual investment metrics from
//! the stored assumptions. Intermediate math runs in `f64` dollars; money
//! results are rounded back to cents.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, Money};

#[derive(Clone, Debug, PartialEq)]
pub struct ProformaScenario {
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub name: String,
    pub purchase_price: Money,
    pub down_payment_percent: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: i32,
    pub monthly_rent: Money,
    pub vacancy_rate_percent: f64,
    /// Taxes, insurance, management, repairs reserve; everything but debt.
    pub monthly_expenses: Money,
    pub closing_costs: Money,
    pub created_at: DateTime<Utc>,
}

/// Metrics derived from a [`ProformaScenario`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioAnalysis {
    pub down_payment: Money,
    pub loan_amount: Money,
    pub monthly_mortgage_payment: Money,
    pub effective_monthly_income: Money,
    pub monthly_net_operating_income: Money,
    pub annual_net_operating_income: Money,
    pub monthly_cash_flow: Money,
    pub annual_cash_flow: Money,
    pub total_cash_invested: Money,
    pub cap_rate_percent: f64,
    /// `None` when no cash is invested.
    pub cash_on_cash_percent: Option<f64>,
}

impl ProformaScenario {
    pub fn analyze(&self) -> ScenarioAnalysis {
        let price = self.purchase_price.as_dollars();
        let down_payment = price * self.down_payment_percent / 100.0;
        let loan = price - down_payment;
        let payment = monthly_payment(loan, self.interest_rate_percent, self.loan_term_years);

        let effective_income =
            self.monthly_rent.as_dollars() * (1.0 - self.vacancy_rate_percent / 100.0);
        let monthly_noi = effective_income - self.monthly_expenses.as_dollars();
        let monthly_cash_flow = monthly_noi - payment;
        let invested = down_payment + self.closing_costs.as_dollars();

        let cap_rate = if price > 0.0 {
            monthly_noi * 12.0 / price * 100.0
        } else {
            0.0
        };
        let cash_on_cash = (invested > 0.0).then(|| monthly_cash_flow * 12.0 / invested * 100.0);

        ScenarioAnalysis {
            down_payment: to_money(down_payment),
            loan_amount: to_money(loan),
            monthly_mortgage_payment: to_money(payment),
            effective_monthly_income: to_money(effective_income),
            monthly_net_operating_income: to_money(monthly_noi),
            annual_net_operating_income: to_money(monthly_noi * 12.0),
            monthly_cash_flow: to_money(monthly_cash_flow),
            annual_cash_flow: to_money(monthly_cash_flow * 12.0),
            total_cash_invested: to_money(invested),
            cap_rate_percent: cap_rate,
            cash_on_cash_percent: cash_on_cash,
        }
    }
}

/// Standard amortized payment; a zero rate divides the principal evenly.
fn monthly_payment(principal: f64, annual_rate_percent: f64, years: i32) -> f64 {
    let periods = f64::from(years.max(0) * 12);
    if principal <= 0.0 || periods == 0.0 {
        return 0.0;
    }
    let rate = annual_rate_percent / 100.0 / 12.0;
    if rate == 0.0 {
        return principal / periods;
    }
    let growth = (1.0 + rate).powf(periods);
    principal * rate * growth / (growth - 1.0)
}

fn to_money(dollars: f64) -> Money {
    Money::new((dollars * 100.0).round() as i64)
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "proforma_scenarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub name: String,
    pub purchase_price: i64,
    pub down_payment_percent: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: i32,
    pub monthly_rent: i64,
    pub vacancy_rate_percent: f64,
    pub monthly_expenses: i64,
    pub closing_costs: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ProformaScenario {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            property_id: model.property_id,
            name: model.name,
            purchase_price: Money::new(model.purchase_price),
            down_payment_percent: model.down_payment_percent,
            interest_rate_percent: model.interest_rate_percent,
            loan_term_years: model.loan_term_years,
            monthly_rent: Money::new(model.monthly_rent),
            vacancy_rate_percent: model.vacancy_rate_percent,
            monthly_expenses: Money::new(model.monthly_expenses),
            closing_costs: Money::new(model.closing_costs),
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> ProformaScenario {
        ProformaScenario {
            id: Uuid::new_v4(),
            user_id: "alice".to_string(),
            property_id: None,
            name: "Duplex".to_string(),
            purchase_price: Money::from_dollars(200_000),
            down_payment_percent: 20.0,
            interest_rate_percent: 6.0,
            loan_term_years: 30,
            monthly_rent: Money::from_dollars(2_000),
            vacancy_rate_percent: 5.0,
            monthly_expenses: Money::from_dollars(500),
            closing_costs: Money::from_dollars(5_000),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn textbook_mortgage_payment() {
        // 160k over 30 years at 6% is $959.28/month.
        let analysis = scenario().analyze();
        assert_eq!(analysis.loan_amount, Money::from_dollars(160_000));
        assert_eq!(analysis.down_payment, Money::from_dollars(40_000));
        assert_eq!(analysis.monthly_mortgage_payment, Money::new(95_928));
    }

    #[test]
    fn income_and_cash_flow() {
        let analysis = scenario().analyze();
        assert_eq!(analysis.effective_monthly_income, Money::from_dollars(1_900));
        assert_eq!(analysis.monthly_net_operating_income, Money::from_dollars(1_400));
        assert_eq!(analysis.annual_net_operating_income, Money::from_dollars(16_800));
        assert_eq!(analysis.monthly_cash_flow, Money::new(44_072));
        assert_eq!(analysis.total_cash_invested, Money::from_dollars(45_000));
        assert!((analysis.cap_rate_percent - 8.4).abs() < 1e-9);
        let coc = analysis.cash_on_cash_percent.unwrap();
        assert!((coc - 11.75).abs() < 0.01);
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let mut s = scenario();
        s.interest_rate_percent = 0.0;
        s.loan_term_years = 10;
        let analysis = s.analyze();
        // 160_000 / 120
        assert_eq!(analysis.monthly_mortgage_payment, Money::new(133_333));
    }

    #[test]
    fn all_cash_purchase_has_no_payment() {
        let mut s = scenario();
        s.down_payment_percent = 100.0;
        s.closing_costs = Money::ZERO;
        let analysis = s.analyze();
        assert_eq!(analysis.loan_amount, Money::ZERO);
        assert_eq!(analysis.monthly_mortgage_payment, Money::ZERO);
        assert_eq!(analysis.monthly_cash_flow, Money::from_dollars(1_400));
    }

    #[test]
    fn no_cash_invested_has_no_cash_on_cash() {
        let mut s = scenario();
        s.down_payment_percent = 0.0;
        s.closing_costs = Money::ZERO;
        assert_eq!(s.analyze().cash_on_cash_percent, None);
    }
}
