use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    Document, DocumentFilter, DocumentNew, EngineError, ResultEngine, documents,
    util::normalize_required,
};

use super::Engine;

impl Engine {
    /// Register an uploaded file. The optional property/prospect links must
    /// point to the user's own records.
    pub async fn create_document(&self, user_id: &str, cmd: DocumentNew) -> ResultEngine<Document> {
        let name = normalize_required(&cmd.name, "document name")?;
        let file_url = normalize_required(&cmd.file_url, "file url")?;
        if !(file_url.starts_with("https://") || file_url.starts_with("http://")) {
            return Err(EngineError::InvalidName(format!(
                "file url must be http(s): {file_url}"
            )));
        }
        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;
        if let Some(prospect_id) = cmd.prospect_id {
            self.require_prospect(&self.database, user_id, prospect_id)
                .await?;
        }

        let model = documents::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(name),
            doc_type: ActiveValue::Set(cmd.doc_type.as_str().to_string()),
            file_url: ActiveValue::Set(file_url),
            property_id: ActiveValue::Set(cmd.property_id),
            prospect_id: ActiveValue::Set(cmd.prospect_id),
            uploaded_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.database)
        .await?;

        Document::try_from(model)
    }

    /// Returns `false` when no document with that id belongs to the user.
    pub async fn delete_document(&self, user_id: &str, document_id: Uuid) -> ResultEngine<bool> {
        let res = documents::Entity::delete_many()
            .filter(documents::Column::Id.eq(document_id))
            .filter(documents::Column::UserId.eq(user_id.to_string()))
            .exec(&self.database)
            .await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn document(&self, user_id: &str, document_id: Uuid) -> ResultEngine<Document> {
        let model = self
            .require_document(&self.database, user_id, document_id)
            .await?;
        Document::try_from(model)
    }

    /// Newest uploads first.
    pub async fn list_documents(
        &self,
        user_id: &str,
        filter: &DocumentFilter,
    ) -> ResultEngine<Vec<Document>> {
        let mut query =
            documents::Entity::find().filter(documents::Column::UserId.eq(user_id.to_string()));
        if let Some(property_id) = filter.property_id {
            query = query.filter(documents::Column::PropertyId.eq(property_id));
        }
        if let Some(prospect_id) = filter.prospect_id {
            query = query.filter(documents::Column::ProspectId.eq(prospect_id));
        }
        query
            .order_by_desc(documents::Column::UploadedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Document::try_from)
            .collect()
    }
}
