//! Rental properties: the root of every other record.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, Money, util::string_enum};

string_enum! {
    pub enum PropertyType {
        SingleFamily => "single_family",
        MultiFamily => "multi_family",
        Condo => "condo",
        Townhouse => "townhouse",
        Commercial => "commercial",
    }
}

string_enum! {
    /// Occupancy state of a property.
    pub enum PropertyStatus {
        Vacant => "vacant",
        Occupied => "occupied",
        Renovation => "renovation",
        Listed => "listed",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub user_id: String,
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
    pub purchase_price: Option<Money>,
    pub purchase_date: Option<NaiveDate>,
    pub current_value: Option<Money>,
    /// Scheduled rent, whether or not the unit is currently occupied.
    pub monthly_rent: Money,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub property_type: String,
    pub status: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<i32>,
    pub purchase_price: Option<i64>,
    pub purchase_date: Option<Date>,
    pub current_value: Option<i64>,
    pub monthly_rent: i64,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tenants::Entity")]
    Tenants,
    #[sea_orm(has_many = "super::maintenance::Entity")]
    Maintenance,
}

impl Related<super::tenants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenants.def()
    }
}

impl Related<super::maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintenance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Property {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            address: model.address,
            city: model.city,
            state: model.state,
            zip: model.zip,
            property_type: PropertyType::try_from(model.property_type.as_str())?,
            status: PropertyStatus::try_from(model.status.as_str())?,
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            square_feet: model.square_feet,
            purchase_price: model.purchase_price.map(Money::new),
            purchase_date: model.purchase_date,
            current_value: model.current_value.map(Money::new),
            monthly_rent: Money::new(model.monthly_rent),
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
