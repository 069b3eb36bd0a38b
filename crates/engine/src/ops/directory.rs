//! Reference records: bank accounts, neighbors, access codes and service
//! providers. Create, list and delete only.

use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    BankAccount, BankAccountNew, EngineError, Neighbor, NeighborNew, PropertyCode,
    PropertyCodeNew, ResultEngine, ServiceProvider, ServiceProviderNew, bank_accounts,
    maintenance, neighbors, property_codes, service_providers, transactions,
    util::{normalize_optional, normalize_required},
};

use super::{Engine, with_tx};

fn validate_last_four(value: Option<&str>) -> ResultEngine<Option<String>> {
    let Some(value) = normalize_optional(value) else {
        return Ok(None);
    };
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(EngineError::InvalidName(
            "last four must be exactly 4 digits".to_string(),
        ));
    }
    Ok(Some(value))
}

impl Engine {
    pub async fn create_bank_account(
        &self,
        user_id: &str,
        cmd: BankAccountNew,
    ) -> ResultEngine<BankAccount> {
        let name = normalize_required(&cmd.name, "account name")?;
        let last_four = validate_last_four(cmd.last_four.as_deref())?;
        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;

        let model = bank_accounts::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(name),
            institution: ActiveValue::Set(normalize_optional(cmd.institution.as_deref())),
            account_type: ActiveValue::Set(cmd.account_type.as_str().to_string()),
            last_four: ActiveValue::Set(last_four),
            balance: ActiveValue::Set(cmd.balance.cents()),
            property_id: ActiveValue::Set(cmd.property_id),
        }
        .insert(&self.database)
        .await?;

        BankAccount::try_from(model)
    }

    pub async fn list_bank_accounts(&self, user_id: &str) -> ResultEngine<Vec<BankAccount>> {
        bank_accounts::Entity::find()
            .filter(bank_accounts::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(bank_accounts::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(BankAccount::try_from)
            .collect()
    }

    /// Delete an account; transactions keep existing without the link.
    pub async fn delete_bank_account(&self, user_id: &str, account_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_bank_account(&db_tx, user_id, account_id)
                .await?;
            transactions::Entity::update_many()
                .col_expr(
                    transactions::Column::BankAccountId,
                    Expr::value(Option::<Uuid>::None),
                )
                .filter(transactions::Column::BankAccountId.eq(account_id))
                .exec(&db_tx)
                .await?;
            bank_accounts::Entity::delete_by_id(account_id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    pub async fn create_neighbor(&self, user_id: &str, cmd: NeighborNew) -> ResultEngine<Neighbor> {
        let name = normalize_required(&cmd.name, "neighbor name")?;
        self.require_property(&self.database, user_id, cmd.property_id)
            .await?;

        neighbors::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            name: ActiveValue::Set(name),
            address: ActiveValue::Set(normalize_optional(cmd.address.as_deref())),
            phone: ActiveValue::Set(normalize_optional(cmd.phone.as_deref())),
            email: ActiveValue::Set(normalize_optional(cmd.email.as_deref())),
            notes: ActiveValue::Set(normalize_optional(cmd.notes.as_deref())),
        }
        .insert(&self.database)
        .await
        .map_err(Into::into)
    }

    pub async fn list_neighbors(&self, user_id: &str, property_id: Uuid) -> ResultEngine<Vec<Neighbor>> {
        self.require_property(&self.database, user_id, property_id)
            .await?;
        neighbors::Entity::find()
            .filter(neighbors::Column::PropertyId.eq(property_id))
            .order_by_asc(neighbors::Column::Name)
            .all(&self.database)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_neighbor(&self, user_id: &str, neighbor_id: Uuid) -> ResultEngine<()> {
        let res = neighbors::Entity::delete_many()
            .filter(neighbors::Column::Id.eq(neighbor_id))
            .filter(neighbors::Column::UserId.eq(user_id.to_string()))
            .exec(&self.database)
            .await?;
        if res.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("neighbor not exists".to_string()));
        }
        Ok(())
    }

    pub async fn create_property_code(
        &self,
        user_id: &str,
        cmd: PropertyCodeNew,
    ) -> ResultEngine<PropertyCode> {
        let label = normalize_required(&cmd.label, "code label")?;
        let code = normalize_required(&cmd.code, "code")?;
        self.require_property(&self.database, user_id, cmd.property_id)
            .await?;

        property_codes::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            label: ActiveValue::Set(label),
            code: ActiveValue::Set(code),
            notes: ActiveValue::Set(normalize_optional(cmd.notes.as_deref())),
        }
        .insert(&self.database)
        .await
        .map_err(Into::into)
    }

    pub async fn list_property_codes(
        &self,
        user_id: &str,
        property_id: Uuid,
    ) -> ResultEngine<Vec<PropertyCode>> {
        self.require_property(&self.database, user_id, property_id)
            .await?;
        property_codes::Entity::find()
            .filter(property_codes::Column::PropertyId.eq(property_id))
            .order_by_asc(property_codes::Column::Label)
            .all(&self.database)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_property_code(&self, user_id: &str, code_id: Uuid) -> ResultEngine<()> {
        let res = property_codes::Entity::delete_many()
            .filter(property_codes::Column::Id.eq(code_id))
            .filter(property_codes::Column::UserId.eq(user_id.to_string()))
            .exec(&self.database)
            .await?;
        if res.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("property code not exists".to_string()));
        }
        Ok(())
    }

    pub async fn create_service_provider(
        &self,
        user_id: &str,
        cmd: ServiceProviderNew,
    ) -> ResultEngine<ServiceProvider> {
        let name = normalize_required(&cmd.name, "provider name")?;
        let trade = normalize_required(&cmd.trade, "trade")?;

        service_providers::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(name),
            trade: ActiveValue::Set(trade.to_lowercase()),
            phone: ActiveValue::Set(normalize_optional(cmd.phone.as_deref())),
            email: ActiveValue::Set(normalize_optional(cmd.email.as_deref())),
            notes: ActiveValue::Set(normalize_optional(cmd.notes.as_deref())),
        }
        .insert(&self.database)
        .await
        .map_err(Into::into)
    }

    /// Providers sorted by trade, then name.
    pub async fn list_service_providers(&self, user_id: &str) -> ResultEngine<Vec<ServiceProvider>> {
        service_providers::Entity::find()
            .filter(service_providers::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(service_providers::Column::Trade)
            .order_by_asc(service_providers::Column::Name)
            .all(&self.database)
            .await
            .map_err(Into::into)
    }

    /// Delete a provider; maintenance history keeps existing without the link.
    pub async fn delete_service_provider(
        &self,
        user_id: &str,
        provider_id: Uuid,
    ) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_service_provider(&db_tx, user_id, provider_id)
                .await?;
            maintenance::Entity::update_many()
                .col_expr(
                    maintenance::Column::ServiceProviderId,
                    Expr::value(Option::<Uuid>::None),
                )
                .filter(maintenance::Column::ServiceProviderId.eq(provider_id))
                .exec(&db_tx)
                .await?;
            service_providers::Entity::delete_by_id(provider_id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_four_must_be_four_digits() {
        assert_eq!(validate_last_four(None).unwrap(), None);
        assert_eq!(validate_last_four(Some("  ")).unwrap(), None);
        assert_eq!(
            validate_last_four(Some(" 1234 ")).unwrap(),
            Some("1234".to_string())
        );
        assert!(validate_last_four(Some("123")).is_err());
        assert!(validate_last_four(Some("12a4")).is_err());
    }
}
