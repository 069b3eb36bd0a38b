mod common;

use common::{date, engine_with_db};
use engine::{
    BudgetEntryNew, EngineError, MaintenanceFilter, MaintenanceNew, MaintenanceStatus,
    MaintenanceUpdate, Money, PropertyNew, PropertyStatus, ScenarioNew, TenantNew,
    TransactionFilter, TransactionKind, TransactionNew,
};

fn purchase(name: &str) -> ScenarioNew {
    ScenarioNew {
        property_id: None,
        name: name.to_string(),
        purchase_price: Money::from_dollars(200_000),
        down_payment_percent: 20.0,
        interest_rate_percent: 6.0,
        loan_term_years: 30,
        monthly_rent: Money::from_dollars(2_000),
        vacancy_rate_percent: 0.0,
        monthly_expenses: Money::from_dollars(600),
        closing_costs: Money::ZERO,
    }
}

fn expense(category: &str, dollars: i64, on: chrono::NaiveDate) -> TransactionNew {
    TransactionNew::new(TransactionKind::Expense, category, Money::from_dollars(dollars), on)
}

#[tokio::test]
async fn budget_report_compares_plan_and_actual() {
    let (engine, _db) = engine_with_db().await;
    engine
        .create_budget_entry(
            "alice",
            BudgetEntryNew {
                property_id: None,
                category: "Repairs".to_string(),
                year: 2025,
                month: 3,
                planned_amount: Money::from_dollars(500),
            },
        )
        .await
        .unwrap();
    engine
        .create_transaction("alice", expense("repairs", 120, date(2025, 3, 4)))
        .await
        .unwrap();
    engine
        .create_transaction("alice", expense("repairs", 80, date(2025, 3, 31)))
        .await
        .unwrap();
    engine
        .create_transaction("alice", expense("utilities", 60, date(2025, 3, 10)))
        .await
        .unwrap();
    // Outside the month and not an expense.
    engine
        .create_transaction("alice", expense("repairs", 999, date(2025, 4, 1)))
        .await
        .unwrap();
    engine
        .create_transaction(
            "alice",
            TransactionNew::new(
                TransactionKind::Income,
                "rent",
                Money::from_dollars(1500),
                date(2025, 3, 1),
            ),
        )
        .await
        .unwrap();

    let report = engine.budget_report("alice", 2025, 3).await.unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].category, "repairs");
    assert_eq!(report[0].planned, Money::from_dollars(500));
    assert_eq!(report[0].actual, Money::from_dollars(200));
    assert_eq!(report[0].remaining(), Money::from_dollars(300));
    assert_eq!(report[1].category, "utilities");
    assert_eq!(report[1].planned, Money::ZERO);
    assert_eq!(report[1].actual, Money::from_dollars(60));
}

#[tokio::test]
async fn budget_month_out_of_range_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    let err = engine.budget_report("alice", 2025, 13).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidDate(_)));
}

#[tokio::test]
async fn transaction_filters_and_validation() {
    let (engine, _db) = engine_with_db().await;
    let err = engine
        .create_transaction("alice", expense("repairs", 0, date(2025, 3, 4)))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    engine
        .create_transaction("alice", expense("repairs", 10, date(2025, 1, 4)))
        .await
        .unwrap();
    engine
        .create_transaction("alice", expense("repairs", 20, date(2025, 2, 4)))
        .await
        .unwrap();

    let filter = TransactionFilter {
        from: Some(date(2025, 2, 1)),
        ..Default::default()
    };
    let rows = engine.list_transactions("alice", &filter).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].signed_amount(), Money::from_dollars(-20));

    let backwards = TransactionFilter {
        from: Some(date(2025, 2, 1)),
        to: Some(date(2025, 1, 1)),
        ..Default::default()
    };
    assert!(engine.list_transactions("alice", &backwards).await.is_err());
}

#[tokio::test]
async fn completing_maintenance_stamps_date() {
    let (engine, _db) = engine_with_db().await;
    let property = engine
        .create_property("alice", PropertyNew::new("Oak House", "1 Oak Rd"))
        .await
        .unwrap();
    let record = engine
        .create_maintenance(
            "alice",
            MaintenanceNew::new(property.id, "Broken heater", date(2025, 1, 10)),
        )
        .await
        .unwrap();
    assert_eq!(record.status, MaintenanceStatus::Open);

    let done = engine
        .update_maintenance(
            "alice",
            record.id,
            MaintenanceUpdate {
                status: Some(MaintenanceStatus::Completed),
                completed_on: Some(date(2025, 1, 12)),
                cost: Some(Money::from_dollars(250)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(done.completed_on, Some(date(2025, 1, 12)));
    assert_eq!(done.cost, Some(Money::from_dollars(250)));

    let err = engine
        .update_maintenance(
            "alice",
            record.id,
            MaintenanceUpdate {
                completed_on: Some(date(2024, 12, 31)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidDate(_)));

    let reopened = engine
        .update_maintenance(
            "alice",
            record.id,
            MaintenanceUpdate {
                status: Some(MaintenanceStatus::Open),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(reopened.completed_on, None);

    let open = engine
        .list_maintenance(
            "alice",
            &MaintenanceFilter {
                status: Some(MaintenanceStatus::Open),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(open.len(), 1);
}

#[tokio::test]
async fn scenario_analysis_uses_amortized_payment() {
    let (engine, _db) = engine_with_db().await;
    let scenario = engine
        .create_scenario("alice", purchase("Oak purchase"))
        .await
        .unwrap();

    let analysis = engine.analyze_scenario("alice", scenario.id).await.unwrap();
    assert_eq!(analysis.loan_amount, Money::from_dollars(160_000));
    assert_eq!(analysis.monthly_mortgage_payment, Money::new(95_928));
    assert_eq!(analysis.monthly_net_operating_income, Money::from_dollars(1_400));
    assert_eq!(analysis.total_cash_invested, Money::from_dollars(40_000));
    assert!((analysis.cap_rate_percent - 8.4).abs() < 1e-9);

    let mut bad = purchase("Bad");
    bad.loan_term_years = 0;
    let err = engine.create_scenario("alice", bad).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}

#[tokio::test]
async fn portfolio_summary_counts_current_state() {
    let (engine, _db) = engine_with_db().await;
    let occupied = engine
        .create_property(
            "alice",
            PropertyNew::new("Oak House", "1 Oak Rd").monthly_rent(Money::from_dollars(1500)),
        )
        .await
        .unwrap();
    engine
        .create_property(
            "alice",
            PropertyNew::new("Pine Flat", "9 Pine Ave")
                .monthly_rent(Money::from_dollars(900))
                .status(PropertyStatus::Renovation),
        )
        .await
        .unwrap();
    engine
        .create_tenant(
            "alice",
            TenantNew::new(occupied.id, "Ada", "Lovelace", date(2025, 1, 1), Money::from_dollars(1500)),
        )
        .await
        .unwrap();
    engine
        .create_maintenance(
            "alice",
            MaintenanceNew::new(occupied.id, "Gutter", date(2025, 4, 1)),
        )
        .await
        .unwrap();
    engine
        .create_transaction(
            "alice",
            TransactionNew::new(
                TransactionKind::Income,
                "rent",
                Money::from_dollars(1500),
                date(2025, 4, 1),
            ),
        )
        .await
        .unwrap();
    engine
        .create_transaction("alice", expense("repairs", 300, date(2025, 4, 2)))
        .await
        .unwrap();
    engine
        .create_transaction("alice", expense("repairs", 50, date(2024, 12, 31)))
        .await
        .unwrap();

    let summary = engine
        .portfolio_summary_for_year("alice", 2025)
        .await
        .unwrap();
    assert_eq!(summary.property_count, 2);
    assert_eq!(summary.occupied_count, 1);
    assert!((summary.occupancy_rate_percent - 50.0).abs() < 1e-9);
    assert_eq!(summary.scheduled_monthly_rent, Money::from_dollars(2400));
    assert_eq!(summary.active_tenant_count, 1);
    assert_eq!(summary.open_maintenance_count, 1);
    assert_eq!(summary.year_income, Money::from_dollars(1500));
    assert_eq!(summary.year_expenses, Money::from_dollars(300));
    assert_eq!(summary.year_net(), Money::from_dollars(1200));

    let empty = engine.portfolio_summary_for_year("bob", 2025).await.unwrap();
    assert_eq!(empty.property_count, 0);
    assert_eq!(empty.occupancy_rate_percent, 0.0);
}

#[tokio::test]
async fn amounts_above_the_input_limit_are_rejected() {
    let (engine, _db) = engine_with_db().await;
    let on = date(2025, 1, 10);

    engine
        .create_transaction(
            "alice",
            TransactionNew::new(TransactionKind::Income, "rent", Money::MAX_INPUT, on),
        )
        .await
        .unwrap();
    let err = engine
        .create_transaction(
            "alice",
            TransactionNew::new(
                TransactionKind::Income,
                "rent",
                Money::new(Money::MAX_INPUT.cents() + 1),
                on,
            ),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .create_property(
            "alice",
            PropertyNew::new("Elm House", "2 Elm St").monthly_rent(Money::new(i64::MAX)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}

async fn insert_raw_transaction(
    db: &sea_orm::DatabaseConnection,
    kind: TransactionKind,
    amount: i64,
    on: chrono::NaiveDate,
) {
    use sea_orm::{ConnectionTrait, Statement};

    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO transactions (id, user_id, kind, category, amount, occurred_on, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        vec![
            uuid::Uuid::new_v4().into(),
            "alice".into(),
            kind.as_str().into(),
            "repairs".into(),
            amount.into(),
            on.into(),
            chrono::Utc::now().into(),
        ],
    ))
    .await
    .unwrap();
}

#[tokio::test]
async fn totals_out_of_range_are_errors_not_panics() {
    let (engine, db) = engine_with_db().await;
    let huge = i64::MAX / 2 + 10;
    for kind in [TransactionKind::Income, TransactionKind::Expense] {
        insert_raw_transaction(&db, kind, huge, date(2025, 6, 1)).await;
        insert_raw_transaction(&db, kind, huge, date(2025, 6, 2)).await;
    }

    let err = engine
        .portfolio_summary_for_year("alice", 2025)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine.budget_report("alice", 2025, 6).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    // Other users and other years are unaffected.
    let summary = engine.portfolio_summary_for_year("bob", 2025).await.unwrap();
    assert_eq!(summary.year_income, Money::ZERO);
    assert!(engine.budget_report("alice", 2025, 7).await.unwrap().is_empty());
}
