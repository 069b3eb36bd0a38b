use chrono::Utc;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    EngineError, Property, PropertyNew, PropertyStatus, PropertyType, PropertyUpdate,
    ResultEngine, bank_accounts, budget, documents, maintenance, neighbors, properties,
    property_codes, prospects, scenarios, tenants, transactions,
    util::{normalize_optional, normalize_required, require_non_negative},
};

use super::{Engine, with_tx};

impl Engine {
    /// Add a new property. Names are unique per owner (case-insensitive).
    pub async fn create_property(&self, user_id: &str, cmd: PropertyNew) -> ResultEngine<Property> {
        let name = normalize_required(&cmd.name, "property name")?;
        let address = normalize_required(&cmd.address, "property address")?;
        require_non_negative(cmd.monthly_rent, "monthly rent")?;
        for (amount, label) in [
            (cmd.purchase_price, "purchase price"),
            (cmd.current_value, "current value"),
        ] {
            if let Some(amount) = amount {
                require_non_negative(amount, label)?;
            }
        }

        with_tx!(self, |db_tx| {
            self.ensure_unique_property_name(&db_tx, user_id, &name, None)
                .await?;

            let now = Utc::now();
            let model = properties::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id.to_string()),
                name: ActiveValue::Set(name),
                address: ActiveValue::Set(address),
                city: ActiveValue::Set(normalize_optional(cmd.city.as_deref())),
                state: ActiveValue::Set(normalize_optional(cmd.state.as_deref())),
                zip: ActiveValue::Set(normalize_optional(cmd.zip.as_deref())),
                property_type: ActiveValue::Set(
                    cmd.property_type
                        .unwrap_or(PropertyType::SingleFamily)
                        .as_str()
                        .to_string(),
                ),
                status: ActiveValue::Set(
                    cmd.status
                        .unwrap_or(PropertyStatus::Vacant)
                        .as_str()
                        .to_string(),
                ),
                bedrooms: ActiveValue::Set(cmd.bedrooms),
                bathrooms: ActiveValue::Set(cmd.bathrooms),
                square_feet: ActiveValue::Set(cmd.square_feet),
                purchase_price: ActiveValue::Set(cmd.purchase_price.map(i64::from)),
                purchase_date: ActiveValue::Set(cmd.purchase_date),
                current_value: ActiveValue::Set(cmd.current_value.map(i64::from)),
                monthly_rent: ActiveValue::Set(cmd.monthly_rent.cents()),
                notes: ActiveValue::Set(normalize_optional(cmd.notes.as_deref())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&db_tx)
            .await?;

            Property::try_from(model)
        })
    }

    /// List the user's properties sorted by name.
    pub async fn list_properties(&self, user_id: &str) -> ResultEngine<Vec<Property>> {
        properties::Entity::find()
            .filter(properties::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(properties::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Property::try_from)
            .collect()
    }

    pub async fn property(&self, user_id: &str, property_id: Uuid) -> ResultEngine<Property> {
        let model = self
            .require_property(&self.database, user_id, property_id)
            .await?;
        Property::try_from(model)
    }

    pub async fn update_property(
        &self,
        user_id: &str,
        property_id: Uuid,
        cmd: PropertyUpdate,
    ) -> ResultEngine<Property> {
        with_tx!(self, |db_tx| {
            let model = self.require_property(&db_tx, user_id, property_id).await?;
            let mut active: properties::ActiveModel = model.into();

            if let Some(name) = cmd.name.as_deref() {
                let name = normalize_required(name, "property name")?;
                self.ensure_unique_property_name(&db_tx, user_id, &name, Some(property_id))
                    .await?;
                active.name = ActiveValue::Set(name);
            }
            if let Some(address) = cmd.address.as_deref() {
                active.address = ActiveValue::Set(normalize_required(address, "property address")?);
            }
            if let Some(city) = cmd.city.as_deref() {
                active.city = ActiveValue::Set(normalize_optional(Some(city)));
            }
            if let Some(state) = cmd.state.as_deref() {
                active.state = ActiveValue::Set(normalize_optional(Some(state)));
            }
            if let Some(zip) = cmd.zip.as_deref() {
                active.zip = ActiveValue::Set(normalize_optional(Some(zip)));
            }
            if let Some(property_type) = cmd.property_type {
                active.property_type = ActiveValue::Set(property_type.as_str().to_string());
            }
            if let Some(status) = cmd.status {
                active.status = ActiveValue::Set(status.as_str().to_string());
            }
            if let Some(bedrooms) = cmd.bedrooms {
                active.bedrooms = ActiveValue::Set(Some(bedrooms));
            }
            if let Some(bathrooms) = cmd.bathrooms {
                active.bathrooms = ActiveValue::Set(Some(bathrooms));
            }
            if let Some(square_feet) = cmd.square_feet {
                active.square_feet = ActiveValue::Set(Some(square_feet));
            }
            if let Some(price) = cmd.purchase_price {
                require_non_negative(price, "purchase price")?;
                active.purchase_price = ActiveValue::Set(Some(price.cents()));
            }
            if let Some(date) = cmd.purchase_date {
                active.purchase_date = ActiveValue::Set(Some(date));
            }
            if let Some(value) = cmd.current_value {
                require_non_negative(value, "current value")?;
                active.current_value = ActiveValue::Set(Some(value.cents()));
            }
            if let Some(rent) = cmd.monthly_rent {
                require_non_negative(rent, "monthly rent")?;
                active.monthly_rent = ActiveValue::Set(rent.cents());
            }
            if let Some(notes) = cmd.notes.as_deref() {
                active.notes = ActiveValue::Set(normalize_optional(Some(notes)));
            }
            active.updated_at = ActiveValue::Set(Utc::now());

            let model = active.update(&db_tx).await?;
            Property::try_from(model)
        })
    }

    /// Delete a property and everything that only makes sense with it.
    ///
    /// Tenants, maintenance records, neighbors, access codes and property
    /// documents are removed; optional links from prospects, transactions
    /// (to the property or its tenants), bank accounts, budget lines and
    /// scenarios are cleared.
    pub async fn delete_property(&self, user_id: &str, property_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_property(&db_tx, user_id, property_id).await?;

            let unlinked = Expr::value(Option::<Uuid>::None);
            let tenant_ids: Vec<Uuid> = tenants::Entity::find()
                .select_only()
                .column(tenants::Column::Id)
                .filter(tenants::Column::PropertyId.eq(property_id))
                .into_tuple()
                .all(&db_tx)
                .await?;
            if !tenant_ids.is_empty() {
                transactions::Entity::update_many()
                    .col_expr(transactions::Column::TenantId, unlinked.clone())
                    .filter(transactions::Column::TenantId.is_in(tenant_ids))
                    .exec(&db_tx)
                    .await?;
            }
            tenants::Entity::delete_many()
                .filter(tenants::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            maintenance::Entity::delete_many()
                .filter(maintenance::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            neighbors::Entity::delete_many()
                .filter(neighbors::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            property_codes::Entity::delete_many()
                .filter(property_codes::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            documents::Entity::delete_many()
                .filter(documents::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;

            prospects::Entity::update_many()
                .col_expr(prospects::Column::PropertyId, unlinked.clone())
                .filter(prospects::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            transactions::Entity::update_many()
                .col_expr(transactions::Column::PropertyId, unlinked.clone())
                .filter(transactions::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            bank_accounts::Entity::update_many()
                .col_expr(bank_accounts::Column::PropertyId, unlinked.clone())
                .filter(bank_accounts::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            budget::Entity::update_many()
                .col_expr(budget::Column::PropertyId, unlinked.clone())
                .filter(budget::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;
            scenarios::Entity::update_many()
                .col_expr(scenarios::Column::PropertyId, unlinked)
                .filter(scenarios::Column::PropertyId.eq(property_id))
                .exec(&db_tx)
                .await?;

            properties::Entity::delete_by_id(property_id)
                .exec(&db_tx)
                .await?;

            Ok(())
        })
    }

    async fn ensure_unique_property_name<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        name: &str,
        skip: Option<Uuid>,
    ) -> ResultEngine<()> {
        let wanted = name.to_lowercase();
        let taken = properties::Entity::find()
            .filter(properties::Column::UserId.eq(user_id.to_string()))
            .all(db)
            .await?
            .into_iter()
            .any(|p| Some(p.id) != skip && p.name.to_lowercase() == wanted);
        if taken {
            return Err(EngineError::ExistingKey(name.to_string()));
        }
        Ok(())
    }
}
