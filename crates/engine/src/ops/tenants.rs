use chrono::Utc;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    PropertyStatus, ResultEngine, Tenant, TenantNew, TenantStatus, TenantUpdate, properties,
    tenants, transactions,
    util::{normalize_optional, normalize_required, require_date_order, require_non_negative},
};

use super::{Engine, with_tx};

impl Engine {
    /// Add a tenant to a property. An active tenant marks the property occupied.
    pub async fn create_tenant(&self, user_id: &str, cmd: TenantNew) -> ResultEngine<Tenant> {
        let first_name = normalize_required(&cmd.first_name, "first name")?;
        let last_name = normalize_required(&cmd.last_name, "last name")?;
        require_date_order(cmd.lease_start, cmd.lease_end, "lease")?;
        require_non_negative(cmd.monthly_rent, "monthly rent")?;
        require_non_negative(cmd.security_deposit, "security deposit")?;
        let status = cmd.status.unwrap_or(TenantStatus::Active);

        with_tx!(self, |db_tx| {
            self.require_property(&db_tx, user_id, cmd.property_id)
                .await?;

            let model = tenants::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id.to_string()),
                property_id: ActiveValue::Set(cmd.property_id),
                first_name: ActiveValue::Set(first_name),
                last_name: ActiveValue::Set(last_name),
                email: ActiveValue::Set(normalize_optional(cmd.email.as_deref())),
                phone: ActiveValue::Set(normalize_optional(cmd.phone.as_deref())),
                lease_start: ActiveValue::Set(cmd.lease_start),
                lease_end: ActiveValue::Set(cmd.lease_end),
                monthly_rent: ActiveValue::Set(cmd.monthly_rent.cents()),
                security_deposit: ActiveValue::Set(cmd.security_deposit.cents()),
                status: ActiveValue::Set(status.as_str().to_string()),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(&db_tx)
            .await?;

            if status != TenantStatus::Past {
                self.mark_occupied(&db_tx, cmd.property_id).await?;
            }

            Tenant::try_from(model)
        })
    }

    /// Tenants ordered by lease start, optionally for one property.
    pub async fn list_tenants(
        &self,
        user_id: &str,
        property_id: Option<Uuid>,
    ) -> ResultEngine<Vec<Tenant>> {
        let mut query =
            tenants::Entity::find().filter(tenants::Column::UserId.eq(user_id.to_string()));
        if let Some(property_id) = property_id {
            query = query.filter(tenants::Column::PropertyId.eq(property_id));
        }
        query
            .order_by_asc(tenants::Column::LeaseStart)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Tenant::try_from)
            .collect()
    }

    pub async fn tenant(&self, user_id: &str, tenant_id: Uuid) -> ResultEngine<Tenant> {
        let model = self
            .require_tenant(&self.database, user_id, tenant_id)
            .await?;
        Tenant::try_from(model)
    }

    pub async fn update_tenant(
        &self,
        user_id: &str,
        tenant_id: Uuid,
        cmd: TenantUpdate,
    ) -> ResultEngine<Tenant> {
        let model = self
            .require_tenant(&self.database, user_id, tenant_id)
            .await?;

        let lease_start = cmd.lease_start.unwrap_or(model.lease_start);
        let lease_end = cmd.lease_end.or(model.lease_end);
        require_date_order(lease_start, lease_end, "lease")?;

        let mut active: tenants::ActiveModel = model.into();
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
        active.lease_start = ActiveValue::Set(lease_start);
        active.lease_end = ActiveValue::Set(lease_end);
        if let Some(rent) = cmd.monthly_rent {
            require_non_negative(rent, "monthly rent")?;
            active.monthly_rent = ActiveValue::Set(rent.cents());
        }
        if let Some(deposit) = cmd.security_deposit {
            require_non_negative(deposit, "security deposit")?;
            active.security_deposit = ActiveValue::Set(deposit.cents());
        }
        if let Some(status) = cmd.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }

        let model = active.update(&self.database).await?;
        Tenant::try_from(model)
    }

    /// Delete a tenant. Transactions recorded against it are kept, unlinked.
    pub async fn delete_tenant(&self, user_id: &str, tenant_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_tenant(&db_tx, user_id, tenant_id).await?;
            transactions::Entity::update_many()
                .col_expr(
                    transactions::Column::TenantId,
                    Expr::value(Option::<Uuid>::None),
                )
                .filter(transactions::Column::TenantId.eq(tenant_id))
                .exec(&db_tx)
                .await?;
            tenants::Entity::delete_by_id(tenant_id).exec(&db_tx).await?;
            Ok(())
        })
    }

    pub(super) async fn mark_occupied<C: ConnectionTrait>(
        &self,
        db: &C,
        property_id: Uuid,
    ) -> ResultEngine<()> {
        properties::ActiveModel {
            id: ActiveValue::Set(property_id),
            status: ActiveValue::Set(PropertyStatus::Occupied.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await?;
        Ok(())
    }
}
