mod common;

use common::{date, engine_with_db};
use engine::{
    BankAccountNew, AccountType, DocumentFilter, DocumentNew, DocumentType, EngineError,
    MaintenanceFilter, MaintenanceNew, Money, NeighborNew, PropertyNew, PropertyStatus,
    PropertyUpdate, ProspectNew, TenantNew, TransactionFilter, TransactionKind, TransactionNew,
};

#[tokio::test]
async fn create_property_trims_and_defaults() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property(
            "alice",
            PropertyNew::new("  Maple Duplex ", "12 Maple St").monthly_rent(Money::from_dollars(1800)),
        )
        .await
        .unwrap();

    assert_eq!(property.name, "Maple Duplex");
    assert_eq!(property.status, PropertyStatus::Vacant);
    assert_eq!(property.monthly_rent, Money::new(180_000));

    let listed = engine.list_properties("alice").await.unwrap();
    assert_eq!(listed, vec![property]);
}

#[tokio::test]
async fn property_names_are_unique_per_owner() {
    let (engine, _db) = engine_with_db().await;
    engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();

    let err = engine
        .create_property("alice", PropertyNew::new("oak house", "2 Oak Rd"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));

    engine
        .create_property("bob", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    let err = engine
        .create_property("alice", PropertyNew::new("   ", "1 Oak Rd"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));
}

#[tokio::test]
async fn other_users_properties_are_invisible() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();

    let err = engine.property("bob", property.id).await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("property not exists".to_string()));
    assert!(engine.list_properties("bob").await.unwrap().is_empty());
    assert!(engine.delete_property("bob", property.id).await.is_err());
    assert!(engine.property("alice", property.id).await.is_ok());
}

#[tokio::test]
async fn update_property_changes_only_given_fields() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property(
            "alice",
            PropertyNew::new("Oak House", "1 Oak Rd").monthly_rent(Money::from_dollars(1500)),
        )
        .await
        .unwrap();

    let updated = engine
        .update_property(
            "alice",
            property.id,
            PropertyUpdate {
                status: Some(PropertyStatus::Listed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, PropertyStatus::Listed);
    assert_eq!(updated.name, "Oak House");
    assert_eq!(updated.monthly_rent, Money::from_dollars(1500));
}

#[tokio::test]
async fn delete_property_cascades_and_unlinks() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let other = engine
        .create_property("alice", PropertyNew::new("Pine Flat", "9 Pine Ave"))
        .await
        .unwrap();

    engine
        .create_tenant(
            "alice",
            TenantNew::new(property.id, "Ada", "Lovelace", date(2025, 1, 1), Money::from_dollars(1500)),
        )
        .await
        .unwrap();
    engine
        .create_tenant(
            "alice",
            TenantNew::new(other.id, "Alan", "Turing", date(2025, 1, 1), Money::from_dollars(900)),
        )
        .await
        .unwrap();
    engine
        .create_maintenance(
            "alice",
            MaintenanceNew::new(property.id, "Leaky faucet", date(2025, 2, 1)),
        )
        .await
        .unwrap();
    engine
        .create_neighbor(
            "alice",
            NeighborNew {
                property_id: property.id,
                name: "Mrs. Smith".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    engine
        .create_document(
            "alice",
            DocumentNew::new("Lease", DocumentType::Lease, "https://files.example.com/lease.pdf")
                .property(property.id),
        )
        .await
        .unwrap();
    let prospect = engine
        .create_prospect("alice", ProspectNew::new("Grace", "Hopper").property(property.id))
        .await
        .unwrap();
    let account = engine
        .create_bank_account(
            "alice",
            BankAccountNew {
                name: "Operating".to_string(),
                institution: None,
                account_type: AccountType::Checking,
                last_four: Some("4321".to_string()),
                balance: Money::ZERO,
                property_id: Some(property.id),
            },
        )
        .await
        .unwrap();
    let rent = engine
        .create_transaction(
            "alice",
            TransactionNew::new(
                TransactionKind::Income,
                "Rent",
                Money::from_dollars(1500),
                date(2025, 2, 1),
            )
            .property(property.id),
        )
        .await
        .unwrap();
    assert_eq!(rent.category, "rent");
    assert_eq!(rent.tenant_id, None);

    engine.delete_property("alice", property.id).await.unwrap();

    assert!(engine.property("alice", property.id).await.is_err());
    let tenants = engine.list_tenants("alice", None).await.unwrap();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].property_id, other.id);
    assert!(
        engine
            .list_maintenance("alice", &MaintenanceFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        engine
            .list_documents("alice", &DocumentFilter::default())
            .await
            .unwrap()
            .is_empty()
    );

    let prospect = engine.prospect("alice", prospect.id).await.unwrap();
    assert_eq!(prospect.property_id, None);
    let accounts = engine.list_bank_accounts("alice").await.unwrap();
    assert_eq!(accounts[0].id, account.id);
    assert_eq!(accounts[0].property_id, None);
    let transactions = engine
        .list_transactions("alice", &TransactionFilter::default())
        .await
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].property_id, None);
}

#[tokio::test]
async fn new_tenant_marks_property_occupied() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    engine
        .create_tenant(
            "alice",
            TenantNew::new(property.id, "Ada", "Lovelace", date(2025, 1, 1), Money::from_dollars(1500)),
        )
        .await
        .unwrap();

    let property = engine.property("alice", property.id).await.unwrap();
    assert_eq!(property.status, PropertyStatus::Occupied);
}

#[tokio::test]
async fn deleting_tenants_keeps_their_transactions_unlinked() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let ada = engine
        .create_tenant(
            "alice",
            TenantNew::new(property.id, "Ada", "Lovelace", date(2025, 1, 1), Money::from_dollars(1500)),
        )
        .await
        .unwrap();
    let alan = engine
        .create_tenant(
            "alice",
            TenantNew::new(property.id, "Alan", "Turing", date(2025, 1, 1), Money::from_dollars(900)),
        )
        .await
        .unwrap();
    for tenant in [&ada, &alan] {
        let mut cmd = TransactionNew::new(
            TransactionKind::Income,
            "rent",
            tenant.monthly_rent,
            date(2025, 2, 1),
        );
        cmd.tenant_id = Some(tenant.id);
        engine.create_transaction("alice", cmd).await.unwrap();
    }

    engine.delete_tenant("alice", ada.id).await.unwrap();

    let transactions = engine
        .list_transactions("alice", &TransactionFilter::default())
        .await
        .unwrap();
    assert_eq!(transactions.len(), 2);
    let mut linked: Vec<_> = transactions.iter().map(|tx| tx.tenant_id).collect();
    linked.sort();
    assert_eq!(linked, vec![None, Some(alan.id)]);

    engine.delete_property("alice", property.id).await.unwrap();

    let transactions = engine
        .list_transactions("alice", &TransactionFilter::default())
        .await
        .unwrap();
    assert_eq!(transactions.len(), 2);
    assert!(transactions.iter().all(|tx| tx.tenant_id.is_none()));

    let err = engine.delete_tenant("alice", alan.id).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}
