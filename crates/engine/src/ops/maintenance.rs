use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, MaintenanceFilter, MaintenanceNew, MaintenancePriority, MaintenanceRecord,
    MaintenanceStatus, MaintenanceUpdate, ResultEngine, maintenance,
    util::{normalize_optional, normalize_required, require_non_negative},
};

use super::Engine;

impl Engine {
    pub async fn create_maintenance(
        &self,
        user_id: &str,
        cmd: MaintenanceNew,
    ) -> ResultEngine<MaintenanceRecord> {
        let title = normalize_required(&cmd.title, "title")?;
        if let Some(cost) = cmd.cost {
            require_non_negative(cost, "cost")?;
        }
        self.require_property(&self.database, user_id, cmd.property_id)
            .await?;
        if let Some(provider_id) = cmd.service_provider_id {
            self.require_service_provider(&self.database, user_id, provider_id)
                .await?;
        }

        let model = maintenance::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            service_provider_id: ActiveValue::Set(cmd.service_provider_id),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(normalize_optional(cmd.description.as_deref())),
            priority: ActiveValue::Set(
                cmd.priority
                    .unwrap_or(MaintenancePriority::Medium)
                    .as_str()
                    .to_string(),
            ),
            status: ActiveValue::Set(MaintenanceStatus::Open.as_str().to_string()),
            cost: ActiveValue::Set(cmd.cost.map(i64::from)),
            reported_on: ActiveValue::Set(cmd.reported_on),
            completed_on: ActiveValue::Set(None),
        }
        .insert(&self.database)
        .await?;

        MaintenanceRecord::try_from(model)
    }

    /// Most recently reported first.
    pub async fn list_maintenance(
        &self,
        user_id: &str,
        filter: &MaintenanceFilter,
    ) -> ResultEngine<Vec<MaintenanceRecord>> {
        let mut query =
            maintenance::Entity::find().filter(maintenance::Column::UserId.eq(user_id.to_string()));
        if let Some(property_id) = filter.property_id {
            query = query.filter(maintenance::Column::PropertyId.eq(property_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(maintenance::Column::Status.eq(status.as_str()));
        }
        query
            .order_by_desc(maintenance::Column::ReportedOn)
            .all(&self.database)
            .await?
            .into_iter()
            .map(MaintenanceRecord::try_from)
            .collect()
    }

    /// Update a record. Moving to `completed` stamps today's date unless a
    /// completion date is given; reopening clears it.
    pub async fn update_maintenance(
        &self,
        user_id: &str,
        record_id: Uuid,
        cmd: MaintenanceUpdate,
    ) -> ResultEngine<MaintenanceRecord> {
        let model = self
            .require_maintenance(&self.database, user_id, record_id)
            .await?;
        if let Some(provider_id) = cmd.service_provider_id {
            self.require_service_provider(&self.database, user_id, provider_id)
                .await?;
        }

        let reported_on = model.reported_on;
        let mut completed_on = model.completed_on;
        let mut active: maintenance::ActiveModel = model.into();

        if let Some(provider_id) = cmd.service_provider_id {
            active.service_provider_id = ActiveValue::Set(Some(provider_id));
        }
        if let Some(title) = cmd.title.as_deref() {
            active.title = ActiveValue::Set(normalize_required(title, "title")?);
        }
        if let Some(description) = cmd.description.as_deref() {
            active.description = ActiveValue::Set(normalize_optional(Some(description)));
        }
        if let Some(priority) = cmd.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(cost) = cmd.cost {
            require_non_negative(cost, "cost")?;
            active.cost = ActiveValue::Set(Some(cost.cents()));
        }
        if let Some(date) = cmd.completed_on {
            completed_on = Some(date);
        }
        if let Some(status) = cmd.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
            match status {
                MaintenanceStatus::Completed => {
                    completed_on = completed_on.or_else(|| Some(Utc::now().date_naive()));
                }
                MaintenanceStatus::Open | MaintenanceStatus::InProgress => completed_on = None,
                MaintenanceStatus::Cancelled => {}
            }
        }
        if let Some(date) = completed_on
            && date < reported_on
        {
            return Err(EngineError::InvalidDate(format!(
                "completed on {date} is before reported on {reported_on}"
            )));
        }
        active.completed_on = ActiveValue::Set(completed_on);

        let model = active.update(&self.database).await?;
        MaintenanceRecord::try_from(model)
    }

    pub async fn delete_maintenance(&self, user_id: &str, record_id: Uuid) -> ResultEngine<()> {
        self.require_maintenance(&self.database, user_id, record_id)
            .await?;
        maintenance::Entity::delete_by_id(record_id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
