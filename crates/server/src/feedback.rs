use api_types::feedback::{FeedbackNew, FeedbackView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::users;
use uuid::Uuid;

use crate::{
    ServerError,
    convert::{ToEngine, feedback_view},
    server::ServerState,
};

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<FeedbackView>>, ServerError> {
    let entries = state.engine.list_feedback(&user.username).await?;
    Ok(Json(entries.into_iter().map(feedback_view).collect()))
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<FeedbackNew>,
) -> Result<(StatusCode, Json<FeedbackView>), ServerError> {
    let cmd = engine::FeedbackNew {
        message: payload.message,
        category: payload.category.to_engine(),
        page: payload.page,
    };
    let entry = state.engine.create_feedback(&user.username, cmd).await?;
    tracing::info!("feedback {} received from {}", entry.id, user.username);
    state.revalidator.revalidate_path("/feedback").await;

    Ok((StatusCode::CREATED, Json(feedback_view(entry))))
}

pub async fn resolve(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedbackView>, ServerError> {
    let entry = state.engine.resolve_feedback(&user.username, id).await?;
    state.revalidator.revalidate_path("/feedback").await;
    Ok(Json(feedback_view(entry)))
}
