//! Pro-forma scenario endpoints

use api_types::scenario::{ScenarioAnalysisView, ScenarioNew, ScenarioView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::users;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{analysis_view, money, scenario_view},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<ScenarioView>>, ServerError> {
    let scenarios = state.engine.list_scenarios(&user.username).await?;
    Ok(Json(scenarios.into_iter().map(scenario_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ScenarioNew>,
) -> Result<(StatusCode, Json<ScenarioView>), ServerError> {
    let cmd = engine::ScenarioNew {
        property_id: payload.property_id,
        name: payload.name,
        purchase_price: money(payload.purchase_price_minor),
        down_payment_percent: payload.down_payment_percent,
        interest_rate_percent: payload.interest_rate_percent,
        loan_term_years: payload.loan_term_years,
        monthly_rent: money(payload.monthly_rent_minor),
        vacancy_rate_percent: payload.vacancy_rate_percent,
        monthly_expenses: money(payload.monthly_expenses_minor),
        closing_costs: money(payload.closing_costs_minor),
    };
    let scenario = state.engine.create_scenario(&user.username, cmd).await?;
    state.revalidator.revalidate_path("/scenarios").await;

    Ok((StatusCode::CREATED, Json(scenario_view(scenario))))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScenarioView>, ServerError> {
    let scenario = state.engine.scenario(&user.username, id).await?;
    Ok(Json(scenario_view(scenario)))
}

pub async fn analysis(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScenarioAnalysisView>, ServerError> {
    let analysis = state.engine.analyze_scenario(&user.username, id).await?;
    Ok(Json(analysis_view(analysis)))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_scenario(&user.username, id).await?;
    state.revalidator.revalidate_path("/scenarios").await;
    Ok(StatusCode::NO_CONTENT)
}
