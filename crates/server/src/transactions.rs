//! Income and expense endpoints

use api_types::transaction::{TransactionListQuery, TransactionNew, TransactionView};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{TransactionFilter, users};
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{ToEngine, money, transaction_view},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let filter = TransactionFilter {
        property_id: query.property_id,
        kind: query.kind.map(ToEngine::to_engine),
        from: query.from,
        to: query.to,
    };
    let transactions = state
        .engine
        .list_transactions(&user.username, &filter)
        .await?;
    Ok(Json(transactions.into_iter().map(transaction_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let cmd = engine::TransactionNew {
        property_id: payload.property_id,
        tenant_id: payload.tenant_id,
        bank_account_id: payload.bank_account_id,
        kind: payload.kind.to_engine(),
        category: payload.category,
        amount: money(payload.amount_minor),
        occurred_on: payload.occurred_on,
        description: payload.description,
    };
    let transaction = state
        .engine
        .create_transaction(&user.username, cmd)
        .await?;
    state.revalidator.revalidate_path("/transactions").await;

    Ok((StatusCode::CREATED, Json(transaction_view(transaction))))
}

pub async fn remove(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_transaction(&user.username, id).await?;
    state.revalidator.revalidate_path("/transactions").await;
    Ok(StatusCode::NO_CONTENT)
}
