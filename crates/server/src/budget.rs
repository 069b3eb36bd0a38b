//! Monthly budget entries and the planned-vs-actual report.

use api_types::budget::{
    BudgetEntryNew, BudgetEntryView, BudgetListQuery, BudgetReport, BudgetReportQuery,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::users;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{budget_entry_view, budget_line_view, money},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<BudgetListQuery>,
) -> Result<Json<Vec<BudgetEntryView>>, ServerError> {
    let entries = state
        .engine
        .list_budget_entries(&user.username, query.year, query.month)
        .await?;
    Ok(Json(entries.into_iter().map(budget_entry_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<BudgetEntryNew>,
) -> Result<(StatusCode, Json<BudgetEntryView>), ServerError> {
    let cmd = engine::BudgetEntryNew {
        property_id: payload.property_id,
        category: payload.category,
        year: payload.year,
        month: payload.month,
        planned_amount: money(payload.planned_amount_minor),
    };
    let entry = state
        .engine
        .create_budget_entry(&user.username, cmd)
        .await?;
    state.revalidator.revalidate_path("/budget").await;

    Ok((StatusCode::CREATED, Json(budget_entry_view(entry))))
}

pub async fn report(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<BudgetReportQuery>,
) -> Result<Json<BudgetReport>, ServerError> {
    let lines = state
        .engine
        .budget_report(&user.username, query.year, query.month)
        .await?;
    Ok(Json(BudgetReport {
        year: query.year,
        month: query.month,
        lines: lines.into_iter().map(budget_line_view).collect(),
    }))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_budget_entry(&user.username, id).await?;
    state.revalidator.revalidate_path("/budget").await;
    Ok(StatusCode::NO_CONTENT)
}
