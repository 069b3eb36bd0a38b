//! In-app feedback left by users (bug reports, feature requests).

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, util::string_enum};

string_enum! {
    pub enum FeedbackCategory {
        Bug => "bug",
        Feature => "feature",
        Other => "other",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub user_id: String,
    pub message: String,
    pub category: FeedbackCategory,
    /// Screen the feedback was sent from.
    pub page: Option<String>,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub message: String,
    pub category: String,
    pub page: Option<String>,
    pub resolved: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for FeedbackEntry {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            message: model.message,
            category: FeedbackCategory::try_from(model.category.as_str())?,
            page: model.page,
            resolved: model.resolved,
            created_at: model.created_at,
        })
    }
}
