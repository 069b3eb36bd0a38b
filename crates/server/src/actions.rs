//! Document server actions.
//!
//! Unlike the REST handlers these never fail at the HTTP level: every
//! outcome is an [`ActionResult`] with status 200. Failures are logged and
//! reported through `error`; successes revalidate the affected paths.

use std::future::Future;

use api_types::{
    ActionResult,
    document::{DocumentDeleted, DocumentNew, DocumentView},
};
use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use engine::{Document, Engine, EngineError};
use uuid::Uuid;

use crate::{
    convert::{ToEngine, document_view},
    revalidate::Revalidator,
    server::ServerState,
};

/// Persistence used by the document actions.
pub trait DocumentStore {
    fn create_document(
        &self,
        user_id: &str,
        cmd: engine::DocumentNew,
    ) -> impl Future<Output = Result<Document, EngineError>> + Send;

    /// `Ok(false)` when nothing was deleted.
    fn delete_document(
        &self,
        user_id: &str,
        document_id: Uuid,
    ) -> impl Future<Output = Result<bool, EngineError>> + Send;
}

impl DocumentStore for Engine {
    fn create_document(
        &self,
        user_id: &str,
        cmd: engine::DocumentNew,
    ) -> impl Future<Output = Result<Document, EngineError>> + Send {
        Engine::create_document(self, user_id, cmd)
    }

    fn delete_document(
        &self,
        user_id: &str,
        document_id: Uuid,
    ) -> impl Future<Output = Result<bool, EngineError>> + Send {
        Engine::delete_document(self, user_id, document_id)
    }
}

fn failure_message(action: &str, err: &EngineError) -> String {
    match err {
        EngineError::Database(_) => format!("Failed to {action}"),
        other => format!("Failed to {action}: {other}"),
    }
}

/// Create a document record and revalidate the views showing it.
pub async fn create_document<S: DocumentStore>(
    store: &S,
    revalidator: &Revalidator,
    user_id: &str,
    input: DocumentNew,
) -> ActionResult<DocumentView> {
    let mut cmd = engine::DocumentNew::new(input.name, input.doc_type.to_engine(), input.file_url);
    cmd.property_id = input.property_id;
    cmd.prospect_id = input.prospect_id;

    match store.create_document(user_id, cmd).await {
        Ok(document) => {
            revalidator.revalidate_path("/documents").await;
            if document.property_id.is_some() {
                revalidator.revalidate_path("/properties").await;
            }
            if document.prospect_id.is_some() {
                revalidator.revalidate_path("/prospects").await;
            }
            ActionResult::ok(document_view(document))
        }
        Err(err) => {
            tracing::error!("error creating document: {err}");
            ActionResult::err(failure_message("create document", &err))
        }
    }
}

/// Delete a document; deleting nothing is a failure.
pub async fn delete_document<S: DocumentStore>(
    store: &S,
    revalidator: &Revalidator,
    user_id: &str,
    document_id: Uuid,
) -> ActionResult<DocumentDeleted> {
    match store.delete_document(user_id, document_id).await {
        Ok(true) => {
            revalidator
                .revalidate_paths(&["/documents", "/properties", "/prospects"])
                .await;
            ActionResult::ok(DocumentDeleted { id: document_id })
        }
        Ok(false) => {
            tracing::error!("error deleting document {document_id}: not found");
            ActionResult::err("Failed to delete document: document not found")
        }
        Err(err) => {
            tracing::error!("error deleting document {document_id}: {err}");
            ActionResult::err(failure_message("delete document", &err))
        }
    }
}

/// `POST /actions/documents`
pub async fn create(
    Extension(user): Extension<engine::users::Model>,
    State(state): State<ServerState>,
    payload: Result<Json<DocumentNew>, JsonRejection>,
) -> Json<ActionResult<DocumentView>> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::error!("error creating document: {rejection}");
            return Json(ActionResult::err(format!(
                "Failed to create document: {}",
                rejection.body_text()
            )));
        }
    };
    Json(create_document(state.engine.as_ref(), &state.revalidator, &user.username, input).await)
}

/// `DELETE /actions/documents/{id}`
pub async fn delete(
    Extension(user): Extension<engine::users::Model>,
    State(state): State<ServerState>,
    Path(document_id): Path<Uuid>,
) -> Json<ActionResult<DocumentDeleted>> {
    Json(
        delete_document(
            state.engine.as_ref(),
            &state.revalidator,
            &user.username,
            document_id,
        )
        .await,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use api_types::document::DocumentType;
    use chrono::Utc;
    use sea_orm::DbErr;

    use super::*;

    /// In-memory store; `fail` makes every call return a database error.
    #[derive(Default)]
    struct FakeStore {
        fail: bool,
        documents: Mutex<Vec<Document>>,
    }

    impl DocumentStore for FakeStore {
        async fn create_document(
            &self,
            user_id: &str,
            cmd: engine::DocumentNew,
        ) -> Result<Document, EngineError> {
            if self.fail {
                return Err(EngineError::Database(DbErr::Custom("connection lost".into())));
            }
            let document = Document {
                id: Uuid::new_v4(),
                user_id: user_id.to_string(),
                name: cmd.name,
                doc_type: cmd.doc_type,
                file_url: cmd.file_url,
                property_id: cmd.property_id,
                prospect_id: cmd.prospect_id,
                uploaded_at: Utc::now(),
            };
            self.documents.lock().unwrap().push(document.clone());
            Ok(document)
        }

        async fn delete_document(
            &self,
            user_id: &str,
            document_id: Uuid,
        ) -> Result<bool, EngineError> {
            if self.fail {
                return Err(EngineError::Database(DbErr::Custom("connection lost".into())));
            }
            let mut documents = self.documents.lock().unwrap();
            let before = documents.len();
            documents.retain(|d| !(d.id == document_id && d.user_id == user_id));
            Ok(documents.len() < before)
        }
    }

    fn lease(property_id: Option<Uuid>) -> DocumentNew {
        DocumentNew {
            name: "Lease 2025".to_string(),
            doc_type: DocumentType::Lease,
            file_url: "https://files.example.com/lease.pdf".to_string(),
            property_id,
            prospect_id: None,
        }
    }

    #[tokio::test]
    async fn create_returns_document_and_revalidates() {
        let store = FakeStore::default();
        let revalidator = Revalidator::new();
        let property_id = Uuid::new_v4();

        let result = create_document(&store, &revalidator, "alice", lease(Some(property_id))).await;

        assert!(result.success);
        assert!(result.error.is_none());
        let document = result.data.unwrap();
        assert_eq!(document.name, "Lease 2025");
        assert_eq!(document.doc_type, DocumentType::Lease);
        assert_eq!(document.property_id, Some(property_id));
        assert_eq!(revalidator.generation("/documents").await, 1);
        assert_eq!(revalidator.generation("/properties").await, 1);
        assert_eq!(revalidator.generation("/prospects").await, 0);
    }

    #[tokio::test]
    async fn create_failure_is_reported_not_raised() {
        let store = FakeStore {
            fail: true,
            ..Default::default()
        };
        let revalidator = Revalidator::new();

        let result = create_document(&store, &revalidator, "alice", lease(None)).await;

        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.error.as_deref(), Some("Failed to create document"));
        assert_eq!(revalidator.generation("/documents").await, 0);
    }

    #[tokio::test]
    async fn delete_returns_id() {
        let store = FakeStore::default();
        let revalidator = Revalidator::new();
        let created = create_document(&store, &revalidator, "alice", lease(None))
            .await
            .data
            .unwrap();

        let result = delete_document(&store, &revalidator, "alice", created.id).await;

        assert!(result.success);
        assert_eq!(result.data, Some(DocumentDeleted { id: created.id }));
        assert_eq!(revalidator.generation("/documents").await, 2);
    }

    #[tokio::test]
    async fn delete_of_nothing_is_a_failure() {
        let store = FakeStore::default();
        let revalidator = Revalidator::new();

        let result = delete_document(&store, &revalidator, "alice", Uuid::new_v4()).await;

        assert!(!result.success);
        assert!(!result.error.unwrap_or_default().is_empty());
        assert_eq!(revalidator.generation("/documents").await, 0);
    }

    #[tokio::test]
    async fn delete_failure_is_reported_not_raised() {
        let store = FakeStore {
            fail: true,
            ..Default::default()
        };
        let revalidator = Revalidator::new();

        let result = delete_document(&store, &revalidator, "alice", Uuid::new_v4()).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Failed to delete document"));
    }

    #[test]
    fn validation_errors_keep_their_detail() {
        let message = failure_message(
            "create document",
            &EngineError::InvalidName("file url must be http(s): ftp://x".to_string()),
        );
        assert!(message.starts_with("Failed to create document: "));
        assert!(message.contains("ftp://x"));
    }
}
