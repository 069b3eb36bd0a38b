//! Persistence and domain rules for RentDesk.
//!
//! The [`Engine`] wraps a `sea_orm` connection and exposes one async method
//! per operation. Every record is owned by a user (the username) and every
//! method takes that `user_id`: records owned by someone else behave as if
//! they did not exist.
//!
//! Monetary values are [`Money`] (integer cents). Presentation helpers live
//! in [`format`].

pub use bank_accounts::{AccountType, BankAccount};
pub use budget::{BudgetEntry, BudgetLine};
pub use commands::{
    BankAccountNew, BudgetEntryNew, DocumentFilter, DocumentNew, FeedbackNew, MaintenanceFilter,
    MaintenanceNew, MaintenanceUpdate, NeighborNew, PropertyCodeNew, PropertyNew, PropertyUpdate,
    ProspectConversion, ProspectNew, ProspectUpdate, ScenarioNew, ServiceProviderNew, TenantNew,
    TenantUpdate, TransactionFilter, TransactionNew,
};
pub use documents::{Document, DocumentType};
pub use error::EngineError;
pub use feedback::{FeedbackCategory, FeedbackEntry};
pub use maintenance::{MaintenancePriority, MaintenanceRecord, MaintenanceStatus};
pub use money::Money;
pub use neighbors::Neighbor;
pub use ops::{Engine, EngineBuilder, PortfolioSummary};
pub use properties::{Property, PropertyStatus, PropertyType};
pub use property_codes::PropertyCode;
pub use prospects::{Prospect, ProspectStatus};
pub use scenarios::{ProformaScenario, ScenarioAnalysis};
pub use service_providers::ServiceProvider;
pub use tenants::{Tenant, TenantStatus};
pub use transactions::{Transaction, TransactionKind};

mod bank_accounts;
mod budget;
mod commands;
mod documents;
mod error;
mod feedback;
pub mod format;
mod maintenance;
mod money;
mod neighbors;
mod ops;
mod properties;
mod property_codes;
mod prospects;
mod scenarios;
mod service_providers;
mod tenants;
mod transactions;
pub mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
