//! Initial schema: every table RentDesk needs.
//!
//! - `users`: authentication, and the owner of every other row
//! - `properties`: the portfolio
//! - `prospects`, `tenants`: the leasing pipeline
//! - `transactions`, `bank_accounts`, `budget_entries`: money
//! - `maintenance_records`, `service_providers`: upkeep
//! - `documents`: uploaded files linked to a property or prospect
//! - `neighbors`, `property_codes`: per-property reference data
//! - `proforma_scenarios`: purchase analyses
//! - `feedback_entries`: in-app feedback
//!
//! Money columns are integer cents. Dependents of a property are removed by
//! the engine; the cascading foreign keys mirror that rule.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Username,
    Password,
}

#[derive(Iden)]
enum Properties {
    Table,
    Id,
    UserId,
    Name,
    Address,
    City,
    State,
    Zip,
    PropertyType,
    Status,
    Bedrooms,
    Bathrooms,
    SquareFeet,
    PurchasePrice,
    PurchaseDate,
    CurrentValue,
    MonthlyRent,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Prospects {
    Table,
    Id,
    UserId,
    PropertyId,
    FirstName,
    LastName,
    Email,
    Phone,
    Status,
    Source,
    DesiredMoveIn,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
enum Tenants {
    Table,
    Id,
    UserId,
    PropertyId,
    FirstName,
    LastName,
    Email,
    Phone,
    LeaseStart,
    LeaseEnd,
    MonthlyRent,
    SecurityDeposit,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum BankAccounts {
    Table,
    Id,
    UserId,
    Name,
    Institution,
    AccountType,
    LastFour,
    Balance,
    PropertyId,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    UserId,
    PropertyId,
    TenantId,
    BankAccountId,
    Kind,
    Category,
    Amount,
    OccurredOn,
    Description,
    CreatedAt,
}

#[derive(Iden)]
enum ServiceProviders {
    Table,
    Id,
    UserId,
    Name,
    Trade,
    Phone,
    Email,
    Notes,
}

#[derive(Iden)]
enum MaintenanceRecords {
    Table,
    Id,
    UserId,
    PropertyId,
    ServiceProviderId,
    Title,
    Description,
    Priority,
    Status,
    Cost,
    ReportedOn,
    CompletedOn,
}

#[derive(Iden)]
enum Documents {
    Table,
    Id,
    UserId,
    Name,
    DocType,
    FileUrl,
    PropertyId,
    ProspectId,
    UploadedAt,
}

#[derive(Iden)]
enum ProformaScenarios {
    Table,
    Id,
    UserId,
    PropertyId,
    Name,
    PurchasePrice,
    DownPaymentPercent,
    InterestRatePercent,
    LoanTermYears,
    MonthlyRent,
    VacancyRatePercent,
    MonthlyExpenses,
    ClosingCosts,
    CreatedAt,
}

#[derive(Iden)]
enum FeedbackEntries {
    Table,
    Id,
    UserId,
    Message,
    Category,
    Page,
    Resolved,
    CreatedAt,
}

#[derive(Iden)]
enum Neighbors {
    Table,
    Id,
    UserId,
    PropertyId,
    Name,
    Address,
    Phone,
    Email,
    Notes,
}

#[derive(Iden)]
enum PropertyCodes {
    Table,
    Id,
    UserId,
    PropertyId,
    Label,
    Code,
    Notes,
}

#[derive(Iden)]
enum BudgetEntries {
    Table,
    Id,
    UserId,
    PropertyId,
    Category,
    Year,
    Month,
    PlannedAmount,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

fn owner_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).string().not_null().to_owned()
}

fn owner_fk<T: IntoIden + 'static, C: IntoIden + 'static>(
    table: T,
    col: C,
    name: &str,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Users::Table, Users::Username)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Properties
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(id_col(Properties::Id))
                    .col(owner_col(Properties::UserId))
                    .col(ColumnDef::new(Properties::Name).string().not_null())
                    .col(ColumnDef::new(Properties::Address).string().not_null())
                    .col(ColumnDef::new(Properties::City).string())
                    .col(ColumnDef::new(Properties::State).string())
                    .col(ColumnDef::new(Properties::Zip).string())
                    .col(
                        ColumnDef::new(Properties::PropertyType)
                            .string()
                            .not_null()
                            .default("single_family"),
                    )
                    .col(
                        ColumnDef::new(Properties::Status)
                            .string()
                            .not_null()
                            .default("vacant"),
                    )
                    .col(ColumnDef::new(Properties::Bedrooms).integer())
                    .col(ColumnDef::new(Properties::Bathrooms).double())
                    .col(ColumnDef::new(Properties::SquareFeet).integer())
                    .col(ColumnDef::new(Properties::PurchasePrice).big_integer())
                    .col(ColumnDef::new(Properties::PurchaseDate).date())
                    .col(ColumnDef::new(Properties::CurrentValue).big_integer())
                    .col(
                        ColumnDef::new(Properties::MonthlyRent)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Properties::Notes).string())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        Properties::Table,
                        Properties::UserId,
                        "fk-properties-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-properties-user_id")
                    .table(Properties::Table)
                    .col(Properties::UserId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Prospects
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Prospects::Table)
                    .if_not_exists()
                    .col(id_col(Prospects::Id))
                    .col(owner_col(Prospects::UserId))
                    .col(ColumnDef::new(Prospects::PropertyId).uuid())
                    .col(ColumnDef::new(Prospects::FirstName).string().not_null())
                    .col(ColumnDef::new(Prospects::LastName).string().not_null())
                    .col(ColumnDef::new(Prospects::Email).string())
                    .col(ColumnDef::new(Prospects::Phone).string())
                    .col(
                        ColumnDef::new(Prospects::Status)
                            .string()
                            .not_null()
                            .default("new"),
                    )
                    .col(ColumnDef::new(Prospects::Source).string())
                    .col(ColumnDef::new(Prospects::DesiredMoveIn).date())
                    .col(ColumnDef::new(Prospects::Notes).string())
                    .col(
                        ColumnDef::new(Prospects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        Prospects::Table,
                        Prospects::UserId,
                        "fk-prospects-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Tenants
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Tenants::Table)
                    .if_not_exists()
                    .col(id_col(Tenants::Id))
                    .col(owner_col(Tenants::UserId))
                    .col(ColumnDef::new(Tenants::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Tenants::FirstName).string().not_null())
                    .col(ColumnDef::new(Tenants::LastName).string().not_null())
                    .col(ColumnDef::new(Tenants::Email).string())
                    .col(ColumnDef::new(Tenants::Phone).string())
                    .col(ColumnDef::new(Tenants::LeaseStart).date().not_null())
                    .col(ColumnDef::new(Tenants::LeaseEnd).date())
                    .col(ColumnDef::new(Tenants::MonthlyRent).big_integer().not_null())
                    .col(
                        ColumnDef::new(Tenants::SecurityDeposit)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tenants::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Tenants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        Tenants::Table,
                        Tenants::UserId,
                        "fk-tenants-user_id",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tenants-property_id")
                            .from(Tenants::Table, Tenants::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tenants-property_id")
                    .table(Tenants::Table)
                    .col(Tenants::PropertyId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Bank accounts
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(BankAccounts::Table)
                    .if_not_exists()
                    .col(id_col(BankAccounts::Id))
                    .col(owner_col(BankAccounts::UserId))
                    .col(ColumnDef::new(BankAccounts::Name).string().not_null())
                    .col(ColumnDef::new(BankAccounts::Institution).string())
                    .col(
                        ColumnDef::new(BankAccounts::AccountType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BankAccounts::LastFour).string())
                    .col(
                        ColumnDef::new(BankAccounts::Balance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(BankAccounts::PropertyId).uuid())
                    .foreign_key(&mut owner_fk(
                        BankAccounts::Table,
                        BankAccounts::UserId,
                        "fk-bank_accounts-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 6. Transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(id_col(Transactions::Id))
                    .col(owner_col(Transactions::UserId))
                    .col(ColumnDef::new(Transactions::PropertyId).uuid())
                    .col(ColumnDef::new(Transactions::TenantId).uuid())
                    .col(ColumnDef::new(Transactions::BankAccountId).uuid())
                    .col(ColumnDef::new(Transactions::Kind).string().not_null())
                    .col(ColumnDef::new(Transactions::Category).string().not_null())
                    .col(ColumnDef::new(Transactions::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Transactions::OccurredOn).date().not_null())
                    .col(ColumnDef::new(Transactions::Description).string())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        Transactions::Table,
                        Transactions::UserId,
                        "fk-transactions-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-user_id-occurred_on")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .col(Transactions::OccurredOn)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 7. Service providers and maintenance
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(ServiceProviders::Table)
                    .if_not_exists()
                    .col(id_col(ServiceProviders::Id))
                    .col(owner_col(ServiceProviders::UserId))
                    .col(ColumnDef::new(ServiceProviders::Name).string().not_null())
                    .col(ColumnDef::new(ServiceProviders::Trade).string().not_null())
                    .col(ColumnDef::new(ServiceProviders::Phone).string())
                    .col(ColumnDef::new(ServiceProviders::Email).string())
                    .col(ColumnDef::new(ServiceProviders::Notes).string())
                    .foreign_key(&mut owner_fk(
                        ServiceProviders::Table,
                        ServiceProviders::UserId,
                        "fk-service_providers-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecords::Table)
                    .if_not_exists()
                    .col(id_col(MaintenanceRecords::Id))
                    .col(owner_col(MaintenanceRecords::UserId))
                    .col(
                        ColumnDef::new(MaintenanceRecords::PropertyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MaintenanceRecords::ServiceProviderId).uuid())
                    .col(ColumnDef::new(MaintenanceRecords::Title).string().not_null())
                    .col(ColumnDef::new(MaintenanceRecords::Description).string())
                    .col(
                        ColumnDef::new(MaintenanceRecords::Priority)
                            .string()
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::Status)
                            .string()
                            .not_null()
                            .default("open"),
                    )
                    .col(ColumnDef::new(MaintenanceRecords::Cost).big_integer())
                    .col(
                        ColumnDef::new(MaintenanceRecords::ReportedOn)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MaintenanceRecords::CompletedOn).date())
                    .foreign_key(&mut owner_fk(
                        MaintenanceRecords::Table,
                        MaintenanceRecords::UserId,
                        "fk-maintenance_records-user_id",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-maintenance_records-property_id")
                            .from(MaintenanceRecords::Table, MaintenanceRecords::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 8. Documents
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(id_col(Documents::Id))
                    .col(owner_col(Documents::UserId))
                    .col(ColumnDef::new(Documents::Name).string().not_null())
                    .col(ColumnDef::new(Documents::DocType).string().not_null())
                    .col(ColumnDef::new(Documents::FileUrl).string().not_null())
                    .col(ColumnDef::new(Documents::PropertyId).uuid())
                    .col(ColumnDef::new(Documents::ProspectId).uuid())
                    .col(
                        ColumnDef::new(Documents::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        Documents::Table,
                        Documents::UserId,
                        "fk-documents-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 9. Pro-forma scenarios
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(ProformaScenarios::Table)
                    .if_not_exists()
                    .col(id_col(ProformaScenarios::Id))
                    .col(owner_col(ProformaScenarios::UserId))
                    .col(ColumnDef::new(ProformaScenarios::PropertyId).uuid())
                    .col(ColumnDef::new(ProformaScenarios::Name).string().not_null())
                    .col(
                        ColumnDef::new(ProformaScenarios::PurchasePrice)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::DownPaymentPercent)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::InterestRatePercent)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::LoanTermYears)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::MonthlyRent)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::VacancyRatePercent)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::MonthlyExpenses)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::ClosingCosts)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProformaScenarios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        ProformaScenarios::Table,
                        ProformaScenarios::UserId,
                        "fk-proforma_scenarios-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 10. Feedback
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(FeedbackEntries::Table)
                    .if_not_exists()
                    .col(id_col(FeedbackEntries::Id))
                    .col(owner_col(FeedbackEntries::UserId))
                    .col(ColumnDef::new(FeedbackEntries::Message).string().not_null())
                    .col(ColumnDef::new(FeedbackEntries::Category).string().not_null())
                    .col(ColumnDef::new(FeedbackEntries::Page).string())
                    .col(
                        ColumnDef::new(FeedbackEntries::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FeedbackEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        FeedbackEntries::Table,
                        FeedbackEntries::UserId,
                        "fk-feedback_entries-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 11. Neighbors and property codes
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Neighbors::Table)
                    .if_not_exists()
                    .col(id_col(Neighbors::Id))
                    .col(owner_col(Neighbors::UserId))
                    .col(ColumnDef::new(Neighbors::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Neighbors::Name).string().not_null())
                    .col(ColumnDef::new(Neighbors::Address).string())
                    .col(ColumnDef::new(Neighbors::Phone).string())
                    .col(ColumnDef::new(Neighbors::Email).string())
                    .col(ColumnDef::new(Neighbors::Notes).string())
                    .foreign_key(&mut owner_fk(
                        Neighbors::Table,
                        Neighbors::UserId,
                        "fk-neighbors-user_id",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-neighbors-property_id")
                            .from(Neighbors::Table, Neighbors::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PropertyCodes::Table)
                    .if_not_exists()
                    .col(id_col(PropertyCodes::Id))
                    .col(owner_col(PropertyCodes::UserId))
                    .col(ColumnDef::new(PropertyCodes::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(PropertyCodes::Label).string().not_null())
                    .col(ColumnDef::new(PropertyCodes::Code).string().not_null())
                    .col(ColumnDef::new(PropertyCodes::Notes).string())
                    .foreign_key(&mut owner_fk(
                        PropertyCodes::Table,
                        PropertyCodes::UserId,
                        "fk-property_codes-user_id",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-property_codes-property_id")
                            .from(PropertyCodes::Table, PropertyCodes::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 12. Budget entries
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(BudgetEntries::Table)
                    .if_not_exists()
                    .col(id_col(BudgetEntries::Id))
                    .col(owner_col(BudgetEntries::UserId))
                    .col(ColumnDef::new(BudgetEntries::PropertyId).uuid())
                    .col(ColumnDef::new(BudgetEntries::Category).string().not_null())
                    .col(ColumnDef::new(BudgetEntries::Year).integer().not_null())
                    .col(ColumnDef::new(BudgetEntries::Month).integer().not_null())
                    .col(
                        ColumnDef::new(BudgetEntries::PlannedAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(&mut owner_fk(
                        BudgetEntries::Table,
                        BudgetEntries::UserId,
                        "fk-budget_entries-user_id",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-budget_entries-user_id-year-month")
                    .table(BudgetEntries::Table)
                    .col(BudgetEntries::UserId)
                    .col(BudgetEntries::Year)
                    .col(BudgetEntries::Month)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(BudgetEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PropertyCodes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Neighbors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeedbackEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProformaScenarios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MaintenanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceProviders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BankAccounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tenants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prospects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
