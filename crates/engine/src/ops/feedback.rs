use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, FeedbackEntry, FeedbackNew, ResultEngine, feedback,
    util::{normalize_optional, normalize_required},
};

use super::Engine;

impl Engine {
    pub async fn create_feedback(
        &self,
        user_id: &str,
        cmd: FeedbackNew,
    ) -> ResultEngine<FeedbackEntry> {
        let message = normalize_required(&cmd.message, "feedback message")?;
        let model = feedback::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            message: ActiveValue::Set(message),
            category: ActiveValue::Set(cmd.category.as_str().to_string()),
            page: ActiveValue::Set(normalize_optional(cmd.page.as_deref())),
            resolved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.database)
        .await?;

        FeedbackEntry::try_from(model)
    }

    /// Unresolved entries first, newest first within each group.
    pub async fn list_feedback(&self, user_id: &str) -> ResultEngine<Vec<FeedbackEntry>> {
        feedback::Entity::find()
            .filter(feedback::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(feedback::Column::Resolved)
            .order_by_desc(feedback::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(FeedbackEntry::try_from)
            .collect()
    }

    pub async fn resolve_feedback(
        &self,
        user_id: &str,
        feedback_id: Uuid,
    ) -> ResultEngine<FeedbackEntry> {
        let model = feedback::Entity::find_by_id(feedback_id)
            .filter(feedback::Column::UserId.eq(user_id.to_string()))
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("feedback not exists".to_string()))?;

        let mut active: feedback::ActiveModel = model.into();
        active.resolved = ActiveValue::Set(true);
        let model = active.update(&self.database).await?;
        FeedbackEntry::try_from(model)
    }
}
