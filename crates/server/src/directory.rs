//! Contact-style records: neighbors and access codes (per property), bank
//! accounts and service providers (per user).

use api_types::{
    bank_account::{BankAccountNew, BankAccountView},
    directory::{
        NeighborNew, NeighborView, PropertyCodeNew, PropertyCodeView, ServiceProviderNew,
        ServiceProviderView,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::users;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{
        ToEngine, bank_account_view, money, neighbor_view, property_code_view,
        service_provider_view,
    },
    server::ServerState,
};

pub async fn list_neighbors(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<NeighborView>>, ServerError> {
    let neighbors = state
        .engine
        .list_neighbors(&user.username, property_id)
        .await?;
    Ok(Json(neighbors.into_iter().map(neighbor_view).collect()))
}

pub async fn create_neighbor(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(property_id): Path<Uuid>,
    Json(payload): Json<NeighborNew>,
) -> Result<(StatusCode, Json<NeighborView>), ServerError> {
    let cmd = engine::NeighborNew {
        property_id,
        name: payload.name,
        address: payload.address,
        phone: payload.phone,
        email: payload.email,
        notes: payload.notes,
    };
    let neighbor = state.engine.create_neighbor(&user.username, cmd).await?;
    state.revalidator.revalidate_path("/properties").await;

    Ok((StatusCode::CREATED, Json(neighbor_view(neighbor))))
}

pub async fn delete_neighbor(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_neighbor(&user.username, id).await?;
    state.revalidator.revalidate_path("/properties").await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_codes(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<PropertyCodeView>>, ServerError> {
    let codes = state
        .engine
        .list_property_codes(&user.username, property_id)
        .await?;
    Ok(Json(codes.into_iter().map(property_code_view).collect()))
}

pub async fn create_code(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(property_id): Path<Uuid>,
    Json(payload): Json<PropertyCodeNew>,
) -> Result<(StatusCode, Json<PropertyCodeView>), ServerError> {
    let cmd = engine::PropertyCodeNew {
        property_id,
        label: payload.label,
        code: payload.code,
        notes: payload.notes,
    };
    let code = state
        .engine
        .create_property_code(&user.username, cmd)
        .await?;
    state.revalidator.revalidate_path("/properties").await;

    Ok((StatusCode::CREATED, Json(property_code_view(code))))
}

pub async fn delete_code(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_property_code(&user.username, id).await?;
    state.revalidator.revalidate_path("/properties").await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_bank_accounts(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<BankAccountView>>, ServerError> {
    let accounts = state.engine.list_bank_accounts(&user.username).await?;
    Ok(Json(accounts.into_iter().map(bank_account_view).collect()))
}

pub async fn create_bank_account(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<BankAccountNew>,
) -> Result<(StatusCode, Json<BankAccountView>), ServerError> {
    let cmd = engine::BankAccountNew {
        name: payload.name,
        institution: payload.institution,
        account_type: payload.account_type.to_engine(),
        last_four: payload.last_four,
        balance: money(payload.balance_minor),
        property_id: payload.property_id,
    };
    let account = state
        .engine
        .create_bank_account(&user.username, cmd)
        .await?;
    state.revalidator.revalidate_path("/bank-accounts").await;

    Ok((StatusCode::CREATED, Json(bank_account_view(account))))
}

pub async fn delete_bank_account(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_bank_account(&user.username, id).await?;
    // Transactions lose their account link.
    state
        .revalidator
        .revalidate_paths(&["/bank-accounts", "/transactions"])
        .await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_service_providers(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<ServiceProviderView>>, ServerError> {
    let providers = state.engine.list_service_providers(&user.username).await?;
    Ok(Json(
        providers.into_iter().map(service_provider_view).collect(),
    ))
}

pub async fn create_service_provider(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ServiceProviderNew>,
) -> Result<(StatusCode, Json<ServiceProviderView>), ServerError> {
    let cmd = engine::ServiceProviderNew {
        name: payload.name,
        trade: payload.trade,
        phone: payload.phone,
        email: payload.email,
        notes: payload.notes,
    };
    let provider = state
        .engine
        .create_service_provider(&user.username, cmd)
        .await?;
    state.revalidator.revalidate_path("/service-providers").await;

    Ok((StatusCode::CREATED, Json(service_provider_view(provider))))
}

pub async fn delete_service_provider(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_service_provider(&user.username, id)
        .await?;
    state
        .revalidator
        .revalidate_paths(&["/service-providers", "/maintenance"])
        .await;
    Ok(StatusCode::NO_CONTENT)
}
