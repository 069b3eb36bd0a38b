//! Prospects: people interested in renting, tracked until they sign a lease
//! (conversion into a [`Tenant`](crate::Tenant)) or drop out.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, util::string_enum};

string_enum! {
    /// Pipeline stage of a prospect.
    pub enum ProspectStatus {
        New => "new",
        Contacted => "contacted",
        ShowingScheduled => "showing_scheduled",
        Applied => "applied",
        Approved => "approved",
        Rejected => "rejected",
        Converted => "converted",
    }
}

impl ProspectStatus {
    /// Terminal stages cannot move to `converted`.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Rejected | Self::Converted)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prospect {
    pub id: Uuid,
    pub user_id: String,
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

impl Prospect {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prospects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub property_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub source: Option<String>,
    pub desired_move_in: Option<Date>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Prospect {
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
            status: ProspectStatus::try_from(model.status.as_str())?,
            source: model.source,
            desired_move_in: model.desired_move_in,
            notes: model.notes,
            created_at: model.created_at,
        })
    }
}
