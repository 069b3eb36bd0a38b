mod common;

use common::engine_with_db;
use engine::{
    DocumentFilter, DocumentNew, DocumentType, EngineError, PropertyNew,
};
use uuid::Uuid;

#[tokio::test]
async fn create_and_delete_document() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();

    let document = engine
        .create_document(
            "alice",
            DocumentNew::new(
                " Insurance 2025 ",
                DocumentType::Insurance,
                "https://files.example.com/policy.pdf",
            )
            .property(property.id),
        )
        .await
        .unwrap();
    assert_eq!(document.name, "Insurance 2025");
    assert_eq!(document.doc_type, DocumentType::Insurance);

    let filter = DocumentFilter {
        property_id: Some(property.id),
        ..Default::default()
    };
    assert_eq!(engine.list_documents("alice", &filter).await.unwrap().len(), 1);

    assert!(engine.delete_document("alice", document.id).await.unwrap());
    assert!(!engine.delete_document("alice", document.id).await.unwrap());
    assert!(engine.list_documents("alice", &filter).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_document_of_another_user_deletes_nothing() {
    let (engine, _db) = engine_with_db().await;
    let document = engine
        .create_document(
            "alice",
            DocumentNew::new("Receipt", DocumentType::Receipt, "https://files.example.com/r.pdf"),
        )
        .await
        .unwrap();

    assert!(!engine.delete_document("bob", document.id).await.unwrap());
    assert!(engine.document("alice", document.id).await.is_ok());
}

#[tokio::test]
async fn delete_unknown_document_returns_false() {
    let (engine, _db) = engine_with_db().await;
    assert!(!engine.delete_document("alice", Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn document_requires_http_url_and_owned_links() {
    let (engine, _db) = engine_with_db().await;
    let err = engine
        .create_document(
            "alice",
            DocumentNew::new("Lease", DocumentType::Lease, "file:///tmp/lease.pdf"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));

    let property = engine
        .create_property("bob", PropertyNew::new("Bob's", "2 Elm St"))
        .await
        .unwrap();
    let err = engine
        .create_document(
            "alice",
            DocumentNew::new("Lease", DocumentType::Lease, "https://files.example.com/l.pdf")
                .property(property.id),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}
