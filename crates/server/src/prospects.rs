//! Prospect (lead) endpoints, including conversion to a tenant.

use api_types::{
    prospect::{ProspectConvert, ProspectListQuery, ProspectNew, ProspectUpdate, ProspectView},
    tenant::TenantView,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{ProspectConversion, users};
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{ToEngine, money, prospect_view, tenant_view},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<ProspectListQuery>,
) -> Result<Json<Vec<ProspectView>>, ServerError> {
    let prospects = state
        .engine
        .list_prospects(&user.username, query.property_id)
        .await?;
    Ok(Json(prospects.into_iter().map(prospect_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ProspectNew>,
) -> Result<(StatusCode, Json<ProspectView>), ServerError> {
    let cmd = engine::ProspectNew {
        property_id: payload.property_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        status: payload.status.map(ToEngine::to_engine),
        source: payload.source,
        desired_move_in: payload.desired_move_in,
        notes: payload.notes,
    };
    let prospect = state.engine.create_prospect(&user.username, cmd).await?;
    state.revalidator.revalidate_path("/prospects").await;

    Ok((StatusCode::CREATED, Json(prospect_view(prospect))))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProspectView>, ServerError> {
    let prospect = state.engine.prospect(&user.username, id).await?;
    Ok(Json(prospect_view(prospect)))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProspectUpdate>,
) -> Result<Json<ProspectView>, ServerError> {
    let cmd = engine::ProspectUpdate {
        property_id: payload.property_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        status: payload.status.map(ToEngine::to_engine),
        source: payload.source,
        desired_move_in: payload.desired_move_in,
        notes: payload.notes,
    };
    let prospect = state
        .engine
        .update_prospect(&user.username, id, cmd)
        .await?;
    state.revalidator.revalidate_path("/prospects").await;

    Ok(Json(prospect_view(prospect)))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_prospect(&user.username, id).await?;
    state
        .revalidator
        .revalidate_paths(&["/prospects", "/documents"])
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// Turn a prospect into a tenant of its (or the given) property.
pub async fn convert(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProspectConvert>,
) -> Result<(StatusCode, Json<TenantView>), ServerError> {
    let cmd = ProspectConversion {
        property_id: payload.property_id,
        lease_start: payload.lease_start,
        lease_end: payload.lease_end,
        monthly_rent: payload.monthly_rent_minor.map(money),
        security_deposit: money(payload.security_deposit_minor),
    };
    let tenant = state
        .engine
        .convert_prospect(&user.username, id, cmd)
        .await?;
    state
        .revalidator
        .revalidate_paths(&["/prospects", "/tenants", "/properties"])
        .await;

    Ok((StatusCode::CREATED, Json(tenant_view(tenant))))
}
