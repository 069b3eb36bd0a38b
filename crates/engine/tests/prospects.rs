mod common;

use common::{date, engine_with_db};
use engine::{
    DocumentFilter, DocumentNew, DocumentType, EngineError, Money, PropertyNew, PropertyStatus,
    ProspectConversion, ProspectNew, ProspectStatus, ProspectUpdate, TenantStatus,
};

#[tokio::test]
async fn convert_prospect_creates_tenant() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property(
            "alice",
            PropertyNew::new("Oak House", "1 Oak Rd").monthly_rent(Money::from_dollars(1500)),
        )
        .await
        .unwrap();
    let mut cmd = ProspectNew::new("Grace", "Hopper").property(property.id);
    cmd.email = Some("grace@example.com".to_string());
    let prospect = engine.create_prospect("alice", cmd).await.unwrap();

    let tenant = engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 3, 1)))
        .await
        .unwrap();

    assert_eq!(tenant.first_name, "Grace");
    assert_eq!(tenant.email.as_deref(), Some("grace@example.com"));
    assert_eq!(tenant.property_id, property.id);
    assert_eq!(tenant.monthly_rent, Money::from_dollars(1500));
    assert_eq!(tenant.status, TenantStatus::Active);

    let prospect = engine.prospect("alice", prospect.id).await.unwrap();
    assert_eq!(prospect.status, ProspectStatus::Converted);
    let property = engine.property("alice", property.id).await.unwrap();
    assert_eq!(property.status, PropertyStatus::Occupied);
}

#[tokio::test]
async fn converted_prospect_cannot_convert_again() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Grace", "Hopper").property(property.id))
        .await
        .unwrap();

    engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 3, 1)))
        .await
        .unwrap();
    let err = engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 3, 1)))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidStatus(_)));
    assert_eq!(engine.list_tenants("alice", None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn conversion_requires_a_property() {
    let (engine, _db) = engine_with_db().await;
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Grace", "Hopper"))
        .await
        .unwrap();

    let err = engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 3, 1)))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::KeyNotFound(_)));
    let prospect = engine.prospect("alice", prospect.id).await.unwrap();
    assert_eq!(prospect.status, ProspectStatus::New);
}

#[tokio::test]
async fn converted_status_is_not_settable_directly() {
    let (engine, _db) = engine_with_db().await;
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Grace", "Hopper"))
        .await
        .unwrap();

    let err = engine
        .update_prospect(
            "alice",
            prospect.id,
            ProspectUpdate {
                status: Some(ProspectStatus::Converted),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidStatus(_)));

    let updated = engine
        .update_prospect(
            "alice",
            prospect.id,
            ProspectUpdate {
                status: Some(ProspectStatus::Contacted),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ProspectStatus::Contacted);
}

#[tokio::test]
async fn converted_prospect_cannot_be_reopened() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Grace", "Hopper").property(property.id))
        .await
        .unwrap();
    engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 3, 1)))
        .await
        .unwrap();

    for status in [ProspectStatus::New, ProspectStatus::Approved, ProspectStatus::Rejected] {
        let err = engine
            .update_prospect(
                "alice",
                prospect.id,
                ProspectUpdate {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidStatus(_)), "{status}");
    }

    let err = engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 4, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidStatus(_)));
    assert_eq!(engine.list_tenants("alice", None).await.unwrap().len(), 1);

    // Other fields remain editable.
    let updated = engine
        .update_prospect(
            "alice",
            prospect.id,
            ProspectUpdate {
                notes: Some("moved in".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ProspectStatus::Converted);
    assert_eq!(updated.notes.as_deref(), Some("moved in"));
}

#[tokio::test]
async fn rejected_prospect_stays_rejected() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Alan", "Turing").property(property.id))
        .await
        .unwrap();
    let rejected = engine
        .update_prospect(
            "alice",
            prospect.id,
            ProspectUpdate {
                status: Some(ProspectStatus::Rejected),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(rejected.status, ProspectStatus::Rejected);

    let err = engine
        .update_prospect(
            "alice",
            prospect.id,
            ProspectUpdate {
                status: Some(ProspectStatus::Contacted),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidStatus(_)));

    let err = engine
        .convert_prospect("alice", prospect.id, ProspectConversion::new(date(2025, 3, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidStatus(_)));
    assert!(engine.list_tenants("alice", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_prospect_removes_its_documents() {
    let (engine, _db) = engine_with_db().await;
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Grace", "Hopper"))
        .await
        .unwrap();
    engine
        .create_document(
            "alice",
            DocumentNew::new(
                "Application",
                DocumentType::Application,
                "https://files.example.com/app.pdf",
            )
            .prospect(prospect.id),
        )
        .await
        .unwrap();
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let lease = engine
        .create_document(
            "alice",
            DocumentNew::new("Lease", DocumentType::Lease, "https://files.example.com/lease.pdf")
                .property(property.id)
                .prospect(prospect.id),
        )
        .await
        .unwrap();

    engine.delete_prospect("alice", prospect.id).await.unwrap();

    let documents = engine
        .list_documents("alice", &DocumentFilter::default())
        .await
        .unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, lease.id);
    assert_eq!(documents[0].property_id, Some(property.id));
    assert_eq!(documents[0].prospect_id, None);
}
