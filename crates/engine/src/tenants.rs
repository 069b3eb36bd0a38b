//! Tenants and their lease terms.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, Money, util::string_enum};

string_enum! {
    pub enum TenantStatus {
        Active => "active",
        /// Gave notice, still in the unit.
        Notice => "notice",
        Past => "past",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tenant {
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub lease_start: NaiveDate,
    pub lease_end: Option<NaiveDate>,
    pub monthly_rent: Money,
    pub security_deposit: Money,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub lease_start: Date,
    pub lease_end: Option<Date>,
    pub monthly_rent: i64,
    pub security_deposit: i64,
    pub status: String,
    pub created_at: DateTimeUtc,
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

impl TryFrom<Model> for Tenant {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            property_id: model.property_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            lease_start: model.lease_start,
            lease_end: model.lease_end,
            monthly_rent: Money::new(model.monthly_rent),
            security_deposit: Money::new(model.security_deposit),
            status: TenantStatus::try_from(model.status.as_str())?,
            created_at: model.created_at,
        })
    }
}
