//! Property endpoints

use api_types::property::{PropertyNew, PropertyUpdate, PropertyView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::users;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{ToEngine, money, property_view},
    server::ServerState,
};

/// Paths whose content depends on a property.
const PROPERTY_PATHS: &[&str] = &[
    "/properties",
    "/tenants",
    "/prospects",
    "/maintenance",
    "/documents",
    "/transactions",
    "/bank-accounts",
    "/scenarios",
];

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<PropertyView>>, ServerError> {
    let properties = state.engine.list_properties(&user.username).await?;
    Ok(Json(properties.into_iter().map(property_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<PropertyNew>,
) -> Result<(StatusCode, Json<PropertyView>), ServerError> {
    let cmd = engine::PropertyNew {
        name: payload.name,
        address: payload.address,
        city: payload.city,
        state: payload.state,
        zip: payload.zip,
        property_type: payload.property_type.map(ToEngine::to_engine),
        status: payload.status.map(ToEngine::to_engine),
        bedrooms: payload.bedrooms,
        bathrooms: payload.bathrooms,
        square_feet: payload.square_feet,
        purchase_price: payload.purchase_price_minor.map(money),
        purchase_date: payload.purchase_date,
        current_value: payload.current_value_minor.map(money),
        monthly_rent: money(payload.monthly_rent_minor),
        notes: payload.notes,
    };
    let property = state.engine.create_property(&user.username, cmd).await?;
    state.revalidator.revalidate_path("/properties").await;

    Ok((StatusCode::CREATED, Json(property_view(property))))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PropertyView>, ServerError> {
    let property = state.engine.property(&user.username, id).await?;
    Ok(Json(property_view(property)))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PropertyUpdate>,
) -> Result<Json<PropertyView>, ServerError> {
    let cmd = engine::PropertyUpdate {
        name: payload.name,
        address: payload.address,
        city: payload.city,
        state: payload.state,
        zip: payload.zip,
        property_type: payload.property_type.map(ToEngine::to_engine),
        status: payload.status.map(ToEngine::to_engine),
        bedrooms: payload.bedrooms,
        bathrooms: payload.bathrooms,
        square_feet: payload.square_feet,
        purchase_price: payload.purchase_price_minor.map(money),
        purchase_date: payload.purchase_date,
        current_value: payload.current_value_minor.map(money),
        monthly_rent: payload.monthly_rent_minor.map(money),
        notes: payload.notes,
    };
    let property = state.engine.update_property(&user.username, id, cmd).await?;
    state.revalidator.revalidate_path("/properties").await;

    Ok(Json(property_view(property)))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_property(&user.username, id).await?;
    state.revalidator.revalidate_paths(PROPERTY_PATHS).await;
    Ok(StatusCode::NO_CONTENT)
}
