use api_types::summary::{PortfolioSummaryView, SummaryDisplay};
use axum::{Extension, Json, extract::State};
use engine::{
    PortfolioSummary,
    format::{format_compact_currency, format_currency, format_percent},
    users,
};

use crate::{ServerError, server::ServerState};

/// `GET /summary`: dashboard numbers for the current year.
pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<PortfolioSummaryView>, ServerError> {
    let summary = state.engine.portfolio_summary(&user.username).await?;
    Ok(Json(summary_view(&summary)))
}

fn summary_view(summary: &PortfolioSummary) -> PortfolioSummaryView {
    let year_net = summary.year_net();
    PortfolioSummaryView {
        property_count: summary.property_count,
        occupied_count: summary.occupied_count,
        occupancy_rate_percent: summary.occupancy_rate_percent,
        scheduled_monthly_rent_minor: summary.scheduled_monthly_rent.cents(),
        active_tenant_count: summary.active_tenant_count,
        open_maintenance_count: summary.open_maintenance_count,
        year_income_minor: summary.year_income.cents(),
        year_expenses_minor: summary.year_expenses.cents(),
        year_net_minor: year_net.cents(),
        display: SummaryDisplay {
            scheduled_monthly_rent: format_currency(
                summary.scheduled_monthly_rent.as_dollars(),
                false,
            ),
            year_income: format_compact_currency(summary.year_income.as_dollars()),
            year_expenses: format_compact_currency(summary.year_expenses.as_dollars()),
            year_net: format_compact_currency(year_net.as_dollars()),
            occupancy_rate: format_percent(summary.occupancy_rate_percent, 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use engine::Money;

    use super::*;

    #[test]
    fn display_strings_are_formatted() {
        let view = summary_view(&PortfolioSummary {
            property_count: 2,
            occupied_count: 1,
            occupancy_rate_percent: 50.0,
            scheduled_monthly_rent: Money::new(240_000),
            active_tenant_count: 1,
            open_maintenance_count: 0,
            year_income: Money::from_dollars(1_500_000),
            year_expenses: Money::from_dollars(300),
        });

        assert_eq!(view.year_net_minor, 149_970_000);
        assert_eq!(view.display.scheduled_monthly_rent, "$2,400");
        assert_eq!(view.display.year_income, "$1.5M");
        assert_eq!(view.display.year_expenses, "$300");
        assert_eq!(view.display.year_net, "$1.5M");
        assert_eq!(view.display.occupancy_rate, "50.0%");
    }
}
