//! Wire types of the RentDesk HTTP API.
//!
//! Amounts travel as integer cents in fields suffixed `_minor`. Dates are
//! ISO `YYYY-MM-DD`; timestamps are RFC3339 in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a server action.
///
/// Actions never fail at the HTTP level: `success` tells the caller whether
/// `data` or `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

pub mod property {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PropertyType {
        SingleFamily,
        MultiFamily,
        Condo,
        Townhouse,
        Commercial,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PropertyStatus {
        Vacant,
        Occupied,
        Renovation,
        Listed,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PropertyNew {
        pub name: String,
        pub address: String,
        pub city: Option<String>,
        pub state: Option<String>,
        pub zip: Option<String>,
        /// Defaults to `single_family`.
        pub property_type: Option<PropertyType>,
        /// Defaults to `vacant`.
        pub status: Option<PropertyStatus>,
        pub bedrooms: Option<i32>,
        pub bathrooms: Option<f64>,
        pub square_feet: Option<i32>,
        pub purchase_price_minor: Option<i64>,
        pub purchase_date: Option<NaiveDate>,
        pub current_value_minor: Option<i64>,
        #[serde(default)]
        pub monthly_rent_minor: i64,
        pub notes: Option<String>,
    }

    /// Absent fields are left unchanged.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PropertyUpdate {
        pub name: Option<String>,
        pub address: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub zip: Option<String>,
        pub property_type: Option<PropertyType>,
        pub status: Option<PropertyStatus>,
        pub bedrooms: Option<i32>,
        pub bathrooms: Option<f64>,
        pub square_feet: Option<i32>,
        pub purchase_price_minor: Option<i64>,
        pub purchase_date: Option<NaiveDate>,
        pub current_value_minor: Option<i64>,
        pub monthly_rent_minor: Option<i64>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PropertyView {
        pub id: Uuid,
        pub name: String,
        pub address: String,
        pub city: Option<String>,
        pub state: Option<String>,
        pub zip: Option<String>,
        pub property_type: PropertyType,
        pub status: PropertyStatus,
        pub bedrooms: Option<i32>,
        pub bathrooms: Option<f64>,
        pub square_feet: Option<i32>,
        pub purchase_price_minor: Option<i64>,
        pub purchase_date: Option<NaiveDate>,
        pub current_value_minor: Option<i64>,
        pub monthly_rent_minor: i64,
        pub notes: Option<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod prospect {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ProspectStatus {
        New,
        Contacted,
        ShowingScheduled,
        Applied,
        Approved,
        Rejected,
        Converted,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ProspectListQuery {
        pub property_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProspectNew {
        pub property_id: Option<Uuid>,
        pub first_name: String,
        pub last_name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub status: Option<ProspectStatus>,
        /// Where the lead came from (listing site, referral, ...).
        pub source: Option<String>,
        pub desired_move_in: Option<NaiveDate>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ProspectUpdate {
        pub property_id: Option<Uuid>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub status: Option<ProspectStatus>,
        pub source: Option<String>,
        pub desired_move_in: Option<NaiveDate>,
        pub notes: Option<String>,
    }

    /// Lease terms for turning a prospect into a tenant.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProspectConvert {
        pub property_id: Option<Uuid>,
        pub lease_start: NaiveDate,
        pub lease_end: Option<NaiveDate>,
        /// Defaults to the property's scheduled rent.
        pub monthly_rent_minor: Option<i64>,
        #[serde(default)]
        pub security_deposit_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProspectView {
        pub id: Uuid,
        pub property_id: Option<Uuid>,
        pub first_name: String,
        pub last_name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub status: ProspectStatus,
        pub source: Option<String>,
        pub desired_move_in: Option<NaiveDate>,
        pub notes: Option<String>,
        pub created_at: DateTime<Utc>,
    }
}

pub mod tenant {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TenantStatus {
        Active,
        Notice,
        Past,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TenantListQuery {
        pub property_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TenantNew {
        pub property_id: Uuid,
        pub first_name: String,
        pub last_name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub lease_start: NaiveDate,
        pub lease_end: Option<NaiveDate>,
        pub monthly_rent_minor: i64,
        #[serde(default)]
        pub security_deposit_minor: i64,
        pub status: Option<TenantStatus>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TenantUpdate {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub lease_start: Option<NaiveDate>,
        pub lease_end: Option<NaiveDate>,
        pub monthly_rent_minor: Option<i64>,
        pub security_deposit_minor: Option<i64>,
        pub status: Option<TenantStatus>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TenantView {
        pub id: Uuid,
        pub property_id: Uuid,
        pub first_name: String,
        pub last_name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub lease_start: NaiveDate,
        pub lease_end: Option<NaiveDate>,
        pub monthly_rent_minor: i64,
        pub security_deposit_minor: i64,
        pub status: TenantStatus,
        pub created_at: DateTime<Utc>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    /// Date bounds are inclusive.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionListQuery {
        pub property_id: Option<Uuid>,
        pub kind: Option<TransactionKind>,
        pub from: Option<NaiveDate>,
        pub to: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub property_id: Option<Uuid>,
        pub tenant_id: Option<Uuid>,
        pub bank_account_id: Option<Uuid>,
        pub kind: TransactionKind,
        pub category: String,
        /// Must be > 0. The kind defines the sign.
        pub amount_minor: i64,
        pub occurred_on: NaiveDate,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub property_id: Option<Uuid>,
        pub tenant_id: Option<Uuid>,
        pub bank_account_id: Option<Uuid>,
        pub kind: TransactionKind,
        pub category: String,
        pub amount_minor: i64,
        pub occurred_on: NaiveDate,
        pub description: Option<String>,
        pub created_at: DateTime<Utc>,
    }
}

pub mod maintenance {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MaintenancePriority {
        Low,
        Medium,
        High,
        Urgent,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MaintenanceStatus {
        Open,
        InProgress,
        Completed,
        Cancelled,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct MaintenanceListQuery {
        pub property_id: Option<Uuid>,
        pub status: Option<MaintenanceStatus>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MaintenanceNew {
        pub property_id: Uuid,
        pub service_provider_id: Option<Uuid>,
        pub title: String,
        pub description: Option<String>,
        pub priority: Option<MaintenancePriority>,
        pub cost_minor: Option<i64>,
        pub reported_on: NaiveDate,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct MaintenanceUpdate {
        pub service_provider_id: Option<Uuid>,
        pub title: Option<String>,
        pub description: Option<String>,
        pub priority: Option<MaintenancePriority>,
        /// `completed` stamps `completed_on` with today unless given.
        pub status: Option<MaintenanceStatus>,
        pub cost_minor: Option<i64>,
        pub completed_on: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MaintenanceView {
        pub id: Uuid,
        pub property_id: Uuid,
        pub service_provider_id: Option<Uuid>,
        pub title: String,
        pub description: Option<String>,
        pub priority: MaintenancePriority,
        pub status: MaintenanceStatus,
        pub cost_minor: Option<i64>,
        pub reported_on: NaiveDate,
        pub completed_on: Option<NaiveDate>,
    }
}

pub mod document {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DocumentType {
        Lease,
        Application,
        Inspection,
        Insurance,
        Receipt,
        Tax,
        Other,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct DocumentListQuery {
        pub property_id: Option<Uuid>,
        pub prospect_id: Option<Uuid>,
    }

    /// Record for a file already uploaded to storage.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct DocumentNew {
        pub name: String,
        #[serde(rename = "type")]
        pub doc_type: DocumentType,
        pub file_url: String,
        pub property_id: Option<Uuid>,
        pub prospect_id: Option<Uuid>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct DocumentView {
        pub id: Uuid,
        pub name: String,
        #[serde(rename = "type")]
        pub doc_type: DocumentType,
        pub file_url: String,
        pub property_id: Option<Uuid>,
        pub prospect_id: Option<Uuid>,
        pub uploaded_at: DateTime<Utc>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct DocumentDeleted {
        pub id: Uuid,
    }
}

pub mod scenario {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ScenarioNew {
        pub property_id: Option<Uuid>,
        pub name: String,
        pub purchase_price_minor: i64,
        /// Percent units: `20.0` is 20%.
        pub down_payment_percent: f64,
        pub interest_rate_percent: f64,
        pub loan_term_years: i32,
        pub monthly_rent_minor: i64,
        #[serde(default)]
        pub vacancy_rate_percent: f64,
        #[serde(default)]
        pub monthly_expenses_minor: i64,
        #[serde(default)]
        pub closing_costs_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ScenarioView {
        pub id: Uuid,
        pub property_id: Option<Uuid>,
        pub name: String,
        pub purchase_price_minor: i64,
        pub down_payment_percent: f64,
        pub interest_rate_percent: f64,
        pub loan_term_years: i32,
        pub monthly_rent_minor: i64,
        pub vacancy_rate_percent: f64,
        pub monthly_expenses_minor: i64,
        pub closing_costs_minor: i64,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ScenarioAnalysisView {
        pub down_payment_minor: i64,
        pub loan_amount_minor: i64,
        pub monthly_mortgage_payment_minor: i64,
        pub effective_monthly_income_minor: i64,
        pub monthly_net_operating_income_minor: i64,
        pub annual_net_operating_income_minor: i64,
        pub monthly_cash_flow_minor: i64,
        pub annual_cash_flow_minor: i64,
        pub total_cash_invested_minor: i64,
        pub cap_rate_percent: f64,
        /// Absent when no cash is invested.
        pub cash_on_cash_percent: Option<f64>,
    }
}

pub mod feedback {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FeedbackCategory {
        Bug,
        Feature,
        Other,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FeedbackNew {
        pub message: String,
        pub category: FeedbackCategory,
        pub page: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FeedbackView {
        pub id: Uuid,
        pub message: String,
        pub category: FeedbackCategory,
        pub page: Option<String>,
        pub resolved: bool,
        pub created_at: DateTime<Utc>,
    }
}

pub mod bank_account {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AccountType {
        Checking,
        Savings,
        Credit,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BankAccountNew {
        pub name: String,
        pub institution: Option<String>,
        pub account_type: AccountType,
        pub last_four: Option<String>,
        #[serde(default)]
        pub balance_minor: i64,
        pub property_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BankAccountView {
        pub id: Uuid,
        pub name: String,
        pub institution: Option<String>,
        pub account_type: AccountType,
        pub last_four: Option<String>,
        pub balance_minor: i64,
        pub property_id: Option<Uuid>,
    }
}

pub mod directory {
    //! Per-property neighbors and access codes, plus service providers.
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct NeighborNew {
        pub name: String,
        pub address: Option<String>,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct NeighborView {
        pub id: Uuid,
        pub property_id: Uuid,
        pub name: String,
        pub address: Option<String>,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PropertyCodeNew {
        /// What the code opens ("lockbox", "garage", ...).
        pub label: String,
        pub code: String,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PropertyCodeView {
        pub id: Uuid,
        pub property_id: Uuid,
        pub label: String,
        pub code: String,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ServiceProviderNew {
        pub name: String,
        pub trade: String,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ServiceProviderView {
        pub id: Uuid,
        pub name: String,
        pub trade: String,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub notes: Option<String>,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetListQuery {
        pub year: i32,
        pub month: Option<u32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetReportQuery {
        pub year: i32,
        pub month: u32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetEntryNew {
        pub property_id: Option<Uuid>,
        pub category: String,
        pub year: i32,
        pub month: u32,
        pub planned_amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetEntryView {
        pub id: Uuid,
        pub property_id: Option<Uuid>,
        pub category: String,
        pub year: i32,
        pub month: u32,
        pub planned_amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetLineView {
        pub category: String,
        pub planned_minor: i64,
        pub actual_minor: i64,
        /// Negative when over budget.
        pub remaining_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetReport {
        pub year: i32,
        pub month: u32,
        pub lines: Vec<BudgetLineView>,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PortfolioSummaryView {
        pub property_count: u64,
        pub occupied_count: u64,
        pub occupancy_rate_percent: f64,
        pub scheduled_monthly_rent_minor: i64,
        pub active_tenant_count: u64,
        pub open_maintenance_count: u64,
        pub year_income_minor: i64,
        pub year_expenses_minor: i64,
        pub year_net_minor: i64,
        pub display: SummaryDisplay,
    }

    /// Pre-formatted strings for dashboard cards.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryDisplay {
        /// Full currency, e.g. `$2,400`.
        pub scheduled_monthly_rent: String,
        /// Compact currency, e.g. `$12K`.
        pub year_income: String,
        pub year_expenses: String,
        pub year_net: String,
        /// e.g. `50.0%`.
        pub occupancy_rate: String,
    }
}
