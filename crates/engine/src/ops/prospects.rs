use chrono::Utc;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    EngineError, Money, Prospect, ProspectConversion, ProspectNew, ProspectStatus, ProspectUpdate,
    ResultEngine, Tenant, TenantStatus, documents, prospects, tenants,
    util::{normalize_optional, normalize_required, require_date_order, require_non_negative},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_prospect(&self, user_id: &str, cmd: ProspectNew) -> ResultEngine<Prospect> {
        let first_name = normalize_required(&cmd.first_name, "first name")?;
        let last_name = normalize_required(&cmd.last_name, "last name")?;
        let status = cmd.status.unwrap_or(ProspectStatus::New);
        if status == ProspectStatus::Converted {
            return Err(EngineError::InvalidStatus(
                "prospects become converted only through conversion".to_string(),
            ));
        }
        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;

        let model = prospects::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            email: ActiveValue::Set(normalize_optional(cmd.email.as_deref())),
            phone: ActiveValue::Set(normalize_optional(cmd.phone.as_deref())),
            status: ActiveValue::Set(status.as_str().to_string()),
            source: ActiveValue::Set(normalize_optional(cmd.source.as_deref())),
            desired_move_in: ActiveValue::Set(cmd.desired_move_in),
            notes: ActiveValue::Set(normalize_optional(cmd.notes.as_deref())),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.database)
        .await?;

        Prospect::try_from(model)
    }

    /// Newest first, optionally restricted to one property.
    pub async fn list_prospects(
        &self,
        user_id: &str,
        property_id: Option<Uuid>,
    ) -> ResultEngine<Vec<Prospect>> {
        let mut query =
            prospects::Entity::find().filter(prospects::Column::UserId.eq(user_id.to_string()));
        if let Some(property_id) = property_id {
            query = query.filter(prospects::Column::PropertyId.eq(property_id));
        }
        query
            .order_by_desc(prospects::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Prospect::try_from)
            .collect()
    }

    pub async fn prospect(&self, user_id: &str, prospect_id: Uuid) -> ResultEngine<Prospect> {
        let model = self
            .require_prospect(&self.database, user_id, prospect_id)
            .await?;
        Prospect::try_from(model)
    }

    /// `converted` and `rejected` are final: the status of a closed prospect
    /// never changes, other fields stay editable.
    pub async fn update_prospect(
        &self,
        user_id: &str,
        prospect_id: Uuid,
        cmd: ProspectUpdate,
    ) -> ResultEngine<Prospect> {
        if cmd.status == Some(ProspectStatus::Converted) {
            return Err(EngineError::InvalidStatus(
                "use conversion to mark a prospect converted".to_string(),
            ));
        }
        let model = self
            .require_prospect(&self.database, user_id, prospect_id)
            .await?;
        let current = ProspectStatus::try_from(model.status.as_str())?;
        if let Some(status) = cmd.status
            && status != current
            && current.is_closed()
        {
            return Err(EngineError::InvalidStatus(format!(
                "prospect is {current} and its status cannot change"
            )));
        }
        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;

        let mut active: prospects::ActiveModel = model.into();
        if let Some(property_id) = cmd.property_id {
            active.property_id = ActiveValue::Set(Some(property_id));
        }
        if let Some(first_name) = cmd.first_name.as_deref() {
            active.first_name = ActiveValue::Set(normalize_required(first_name, "first name")?);
        }
        if let Some(last_name) = cmd.last_name.as_deref() {
            active.last_name = ActiveValue::Set(normalize_required(last_name, "last name")?);
        }
        if let Some(email) = cmd.email.as_deref() {
            active.email = ActiveValue::Set(normalize_optional(Some(email)));
        }
        if let Some(phone) = cmd.phone.as_deref() {
            active.phone = ActiveValue::Set(normalize_optional(Some(phone)));
        }
        if let Some(status) = cmd.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(source) = cmd.source.as_deref() {
            active.source = ActiveValue::Set(normalize_optional(Some(source)));
        }
        if let Some(date) = cmd.desired_move_in {
            active.desired_move_in = ActiveValue::Set(Some(date));
        }
        if let Some(notes) = cmd.notes.as_deref() {
            active.notes = ActiveValue::Set(normalize_optional(Some(notes)));
        }

        let model = active.update(&self.database).await?;
        Prospect::try_from(model)
    }

    /// Delete a prospect. Documents linked only through the prospect go too;
    /// documents that also belong to a property stay, unlinked from it.
    pub async fn delete_prospect(&self, user_id: &str, prospect_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_prospect(&db_tx, user_id, prospect_id).await?;
            documents::Entity::delete_many()
                .filter(documents::Column::ProspectId.eq(prospect_id))
                .filter(documents::Column::PropertyId.is_null())
                .exec(&db_tx)
                .await?;
            documents::Entity::update_many()
                .col_expr(
                    documents::Column::ProspectId,
                    Expr::value(Option::<Uuid>::None),
                )
                .filter(documents::Column::ProspectId.eq(prospect_id))
                .exec(&db_tx)
                .await?;
            prospects::Entity::delete_by_id(prospect_id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    /// Turn a prospect into a tenant.
    ///
    /// The tenant inherits name and contact details; the prospect is kept
    /// (status `converted`) for history. Rejected or already converted
    /// prospects cannot be converted.
    pub async fn convert_prospect(
        &self,
        user_id: &str,
        prospect_id: Uuid,
        cmd: ProspectConversion,
    ) -> ResultEngine<Tenant> {
        require_date_order(cmd.lease_start, cmd.lease_end, "lease")?;
        require_non_negative(cmd.security_deposit, "security deposit")?;

        with_tx!(self, |db_tx| {
            let prospect = Prospect::try_from(
                self.require_prospect(&db_tx, user_id, prospect_id)
                    .await?,
            )?;
            if prospect.status.is_closed() {
                return Err(EngineError::InvalidStatus(format!(
                    "prospect is {} and cannot be converted",
                    prospect.status
                )));
            }

            let property_id = cmd.property_id.or(prospect.property_id).ok_or_else(|| {
                EngineError::KeyNotFound("property required for conversion".to_string())
            })?;
            let property = self.require_property(&db_tx, user_id, property_id).await?;
            let monthly_rent = cmd
                .monthly_rent
                .unwrap_or(Money::new(property.monthly_rent));
            require_non_negative(monthly_rent, "monthly rent")?;

            let tenant = tenants::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id.to_string()),
                property_id: ActiveValue::Set(property_id),
                first_name: ActiveValue::Set(prospect.first_name.clone()),
                last_name: ActiveValue::Set(prospect.last_name.clone()),
                email: ActiveValue::Set(prospect.email.clone()),
                phone: ActiveValue::Set(prospect.phone.clone()),
                lease_start: ActiveValue::Set(cmd.lease_start),
                lease_end: ActiveValue::Set(cmd.lease_end),
                monthly_rent: ActiveValue::Set(monthly_rent.cents()),
                security_deposit: ActiveValue::Set(cmd.security_deposit.cents()),
                status: ActiveValue::Set(TenantStatus::Active.as_str().to_string()),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(&db_tx)
            .await?;

            prospects::ActiveModel {
                id: ActiveValue::Unchanged(prospect_id),
                status: ActiveValue::Set(ProspectStatus::Converted.as_str().to_string()),
                property_id: ActiveValue::Set(Some(property_id)),
                ..Default::default()
            }
            .update(&db_tx)
            .await?;

            self.mark_occupied(&db_tx, property_id).await?;

            Tenant::try_from(tenant)
        })
    }
}
