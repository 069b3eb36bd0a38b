//! Tenant endpoints

use api_types::tenant::{TenantListQuery, TenantNew, TenantUpdate, TenantView};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::users;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{ToEngine, money, tenant_view},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<TenantListQuery>,
) -> Result<Json<Vec<TenantView>>, ServerError> {
    let tenants = state
        .engine
        .list_tenants(&user.username, query.property_id)
        .await?;
    Ok(Json(tenants.into_iter().map(tenant_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TenantNew>,
) -> Result<(StatusCode, Json<TenantView>), ServerError> {
    let cmd = engine::TenantNew {
        property_id: payload.property_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        lease_start: payload.lease_start,
        lease_end: payload.lease_end,
        monthly_rent: money(payload.monthly_rent_minor),
        security_deposit: money(payload.security_deposit_minor),
        status: payload.status.map(ToEngine::to_engine),
    };
    let tenant = state.engine.create_tenant(&user.username, cmd).await?;
    // A new tenant can flip the property to occupied.
    state
        .revalidator
        .revalidate_paths(&["/tenants", "/properties"])
        .await;

    Ok((StatusCode::CREATED, Json(tenant_view(tenant))))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TenantView>, ServerError> {
    let tenant = state.engine.tenant(&user.username, id).await?;
    Ok(Json(tenant_view(tenant)))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TenantUpdate>,
) -> Result<Json<TenantView>, ServerError> {
    let cmd = engine::TenantUpdate {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        lease_start: payload.lease_start,
        lease_end: payload.lease_end,
        monthly_rent: payload.monthly_rent_minor.map(money),
        security_deposit: payload.security_deposit_minor.map(money),
        status: payload.status.map(ToEngine::to_engine),
    };
    let tenant = state.engine.update_tenant(&user.username, id, cmd).await?;
    state.revalidator.revalidate_path("/tenants").await;

    Ok(Json(tenant_view(tenant)))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_tenant(&user.username, id).await?;
    state.revalidator.revalidate_path("/tenants").await;
    Ok(StatusCode::NO_CONTENT)
}
