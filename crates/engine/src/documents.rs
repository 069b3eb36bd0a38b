//! Stored documents (leases, applications, receipts, ...).
//!
//! The file itself lives in external storage; only its URL is kept here.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{EngineError, util::string_enum};

string_enum! {
    pub enum DocumentType {
        Lease => "lease",
        Application => "application",
        Inspection => "inspection",
        Insurance => "insurance",
        Receipt => "receipt",
        Tax => "tax",
        Other => "other",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub doc_type: DocumentType,
    pub file_url: String,
    pub property_id: Option<Uuid>,
    pub prospect_id: Option<Uuid>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub doc_type: String,
    pub file_url: String,
    pub property_id: Option<Uuid>,
    pub prospect_id: Option<Uuid>,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Document {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            doc_type: DocumentType::try_from(model.doc_type.as_str())?,
            file_url: model.file_url,
            property_id: model.property_id,
            prospect_id: model.prospect_id,
            uploaded_at: model.uploaded_at,
        })
    }
}
