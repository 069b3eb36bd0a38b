//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists. `*Update` commands treat `None`
//! as "leave unchanged".

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    AccountType, DocumentType, FeedbackCategory, MaintenancePriority, MaintenanceStatus, Money,
    PropertyStatus, PropertyType, ProspectStatus, TenantStatus, TransactionKind,
};

/// Create a property. Type defaults to single family, status to vacant.
#[derive(Clone, Debug, Default)]
pub struct PropertyNew {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<i32>,
    pub purchase_price: Option<Money>,
    pub purchase_date: Option<NaiveDate>,
    pub current_value: Option<Money>,
    pub monthly_rent: Money,
    pub notes: Option<String>,
}

impl PropertyNew {
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn monthly_rent(mut self, rent: Money) -> Self {
        self.monthly_rent = rent;
        self
    }

    #[must_use]
    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Clone, Debug, Default)]
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
    pub purchase_price: Option<Money>,
    pub purchase_date: Option<NaiveDate>,
    pub current_value: Option<Money>,
    pub monthly_rent: Option<Money>,
    pub notes: Option<String>,
}

/// Create a prospect. Status defaults to `new`.
#[derive(Clone, Debug, Default)]
pub struct ProspectNew {
    pub property_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ProspectStatus>,
    pub source: Option<String>,
    pub desired_move_in: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ProspectNew {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn property(mut self, property_id: Uuid) -> Self {
        self.property_id = Some(property_id);
        self
    }
}

#[derive(Clone, Debug, Default)]
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

/// Lease terms used when a prospect becomes a tenant.
#[derive(Clone, Debug)]
pub struct ProspectConversion {
    /// Overrides the prospect's property, required when it has none.
    pub property_id: Option<Uuid>,
    pub lease_start: NaiveDate,
    pub lease_end: Option<NaiveDate>,
    /// Defaults to the property's scheduled rent.
    pub monthly_rent: Option<Money>,
    pub security_deposit: Money,
}

impl ProspectConversion {
    #[must_use]
    pub fn new(lease_start: NaiveDate) -> Self {
        Self {
            property_id: None,
            lease_start,
            lease_end: None,
            monthly_rent: None,
            security_deposit: Money::ZERO,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TenantNew {
    pub property_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub lease_start: NaiveDate,
    pub lease_end: Option<NaiveDate>,
    pub monthly_rent: Money,
    pub security_deposit: Money,
    pub status: Option<TenantStatus>,
}

impl TenantNew {
    #[must_use]
    pub fn new(
        property_id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        lease_start: NaiveDate,
        monthly_rent: Money,
    ) -> Self {
        Self {
            property_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            lease_start,
            lease_end: None,
            monthly_rent,
            security_deposit: Money::ZERO,
            status: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TenantUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub monthly_rent: Option<Money>,
    pub security_deposit: Option<Money>,
    pub status: Option<TenantStatus>,
}

#[derive(Clone, Debug)]
pub struct TransactionNew {
    pub property_id: Option<Uuid>,
    pub tenant_id: Option<Uuid>,
    pub bank_account_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub occurred_on: NaiveDate,
    pub description: Option<String>,
}

impl TransactionNew {
    #[must_use]
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            property_id: None,
            tenant_id: None,
            bank_account_id: None,
            kind,
            category: category.into(),
            amount,
            occurred_on,
            description: None,
        }
    }

    #[must_use]
    pub fn property(mut self, property_id: Uuid) -> Self {
        self.property_id = Some(property_id);
        self
    }
}

/// Filters for listing transactions; date bounds are inclusive.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub property_id: Option<Uuid>,
    pub kind: Option<TransactionKind>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Clone, Debug)]
pub struct MaintenanceNew {
    pub property_id: Uuid,
    pub service_provider_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<MaintenancePriority>,
    pub cost: Option<Money>,
    pub reported_on: NaiveDate,
}

impl MaintenanceNew {
    #[must_use]
    pub fn new(property_id: Uuid, title: impl Into<String>, reported_on: NaiveDate) -> Self {
        Self {
            property_id,
            service_provider_id: None,
            title: title.into(),
            description: None,
            priority: None,
            cost: None,
            reported_on,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MaintenanceUpdate {
    pub service_provider_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<MaintenancePriority>,
    pub status: Option<MaintenanceStatus>,
    pub cost: Option<Money>,
    pub completed_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default)]
pub struct MaintenanceFilter {
    pub property_id: Option<Uuid>,
    pub status: Option<MaintenanceStatus>,
}

/// Create a document record for an already uploaded file.
#[derive(Clone, Debug)]
pub struct DocumentNew {
    pub name: String,
    pub doc_type: DocumentType,
    pub file_url: String,
    pub property_id: Option<Uuid>,
    pub prospect_id: Option<Uuid>,
}

impl DocumentNew {
    #[must_use]
    pub fn new(name: impl Into<String>, doc_type: DocumentType, file_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_type,
            file_url: file_url.into(),
            property_id: None,
            prospect_id: None,
        }
    }

    #[must_use]
    pub fn property(mut self, property_id: Uuid) -> Self {
        self.property_id = Some(property_id);
        self
    }

    #[must_use]
    pub fn prospect(mut self, prospect_id: Uuid) -> Self {
        self.prospect_id = Some(prospect_id);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct DocumentFilter {
    pub property_id: Option<Uuid>,
    pub prospect_id: Option<Uuid>,
}

#[derive(Clone, Debug)]
pub struct ScenarioNew {
    pub property_id: Option<Uuid>,
    pub name: String,
    pub purchase_price: Money,
    pub down_payment_percent: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: i32,
    pub monthly_rent: Money,
    pub vacancy_rate_percent: f64,
    pub monthly_expenses: Money,
    pub closing_costs: Money,
}

#[derive(Clone, Debug)]
pub struct FeedbackNew {
    pub message: String,
    pub category: FeedbackCategory,
    pub page: Option<String>,
}

#[derive(Clone, Debug)]
pub struct BankAccountNew {
    pub name: String,
    pub institution: Option<String>,
    pub account_type: AccountType,
    pub last_four: Option<String>,
    pub balance: Money,
    pub property_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default)]
pub struct NeighborNew {
    pub property_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct PropertyCodeNew {
    pub property_id: Uuid,
    pub label: String,
    pub code: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ServiceProviderNew {
    pub name: String,
    pub trade: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug)]
pub struct BudgetEntryNew {
    pub property_id: Option<Uuid>,
    pub category: String,
    pub year: i32,
    pub month: u32,
    pub planned_amount: Money,
}
