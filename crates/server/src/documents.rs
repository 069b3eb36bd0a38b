//! Read side of documents; writes go through [`crate::actions`].

use api_types::document::{DocumentListQuery, DocumentView};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use engine::{DocumentFilter, users};
use uuid::Uuid;

use crate::{ServerError, convert::document_view, server::ServerState};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<Vec<DocumentView>>, ServerError> {
    let filter = DocumentFilter {
        property_id: query.property_id,
        prospect_id: query.prospect_id,
    };
    let documents = state.engine.list_documents(&user.username, &filter).await?;
    Ok(Json(documents.into_iter().map(document_view).collect()))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentView>, ServerError> {
    let document = state.engine.document(&user.username, id).await?;
    Ok(Json(document_view(document)))
}
