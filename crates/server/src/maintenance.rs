//! Maintenance request endpoints

use api_types::maintenance::{
    MaintenanceListQuery, MaintenanceNew, MaintenanceUpdate, MaintenanceView,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{MaintenanceFilter, users};
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{ToEngine, maintenance_view, money},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<MaintenanceListQuery>,
) -> Result<Json<Vec<MaintenanceView>>, ServerError> {
    let filter = MaintenanceFilter {
        property_id: query.property_id,
        status: query.status.map(ToEngine::to_engine),
    };
    let records = state
        .engine
        .list_maintenance(&user.username, &filter)
        .await?;
    Ok(Json(records.into_iter().map(maintenance_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<MaintenanceNew>,
) -> Result<(StatusCode, Json<MaintenanceView>), ServerError> {
    let cmd = engine::MaintenanceNew {
        property_id: payload.property_id,
        service_provider_id: payload.service_provider_id,
        title: payload.title,
        description: payload.description,
        priority: payload.priority.map(ToEngine::to_engine),
        cost: payload.cost_minor.map(money),
        reported_on: payload.reported_on,
    };
    let record = state
        .engine
        .create_maintenance(&user.username, cmd)
        .await?;
    state.revalidator.revalidate_path("/maintenance").await;

    Ok((StatusCode::CREATED, Json(maintenance_view(record))))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MaintenanceUpdate>,
) -> Result<Json<MaintenanceView>, ServerError> {
    let cmd = engine::MaintenanceUpdate {
        service_provider_id: payload.service_provider_id,
        title: payload.title,
        description: payload.description,
        priority: payload.priority.map(ToEngine::to_engine),
        status: payload.status.map(ToEngine::to_engine),
        cost: payload.cost_minor.map(money),
        completed_on: payload.completed_on,
    };
    let record = state
        .engine
        .update_maintenance(&user.username, id, cmd)
        .await?;
    state.revalidator.revalidate_path("/maintenance").await;

    Ok(Json(maintenance_view(record)))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_maintenance(&user.username, id).await?;
    state.revalidator.revalidate_path("/maintenance").await;
    Ok(StatusCode::NO_CONTENT)
}
