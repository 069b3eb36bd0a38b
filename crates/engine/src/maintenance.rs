//! Maintenance requests and repair history per property.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, Money, util::string_enum};

string_enum! {
    pub enum MaintenancePriority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

string_enum! {
    pub enum MaintenanceStatus {
        Open => "open",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl MaintenanceStatus {
    /// Open or in progress.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Uuid,
    pub service_provider_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub cost: Option<Money>,
    pub reported_on: NaiveDate,
    pub completed_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Uuid,
    pub service_provider_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub cost: Option<i64>,
    pub reported_on: Date,
    pub completed_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::PropertyId",
        to = "super::properties::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Property,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for MaintenanceRecord {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            property_id: model.property_id,
            service_provider_id: model.service_provider_id,
            title: model.title,
            description: model.description,
            priority: MaintenancePriority::try_from(model.priority.as_str())?,
            status: MaintenanceStatus::try_from(model.status.as_str())?,
            cost: model.cost.map(Money::new),
            reported_on: model.reported_on,
            completed_on: model.completed_on,
        })
    }
}
