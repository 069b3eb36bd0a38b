use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, Transaction, TransactionFilter, TransactionNew, transactions,
    util::{normalize_optional, normalize_required, require_positive},
};

use super::Engine;

impl Engine {
    /// Record an income or expense. Linked property, tenant and bank account
    /// must belong to the user; a tenant must live in the linked property.
    pub async fn create_transaction(
        &self,
        user_id: &str,
        cmd: TransactionNew,
    ) -> ResultEngine<Transaction> {
        let category = normalize_required(&cmd.category, "category")?.to_lowercase();
        require_positive(cmd.amount, "amount")?;

        self.require_optional_property(&self.database, user_id, cmd.property_id)
            .await?;
        if let Some(tenant_id) = cmd.tenant_id {
            let tenant = self
                .require_tenant(&self.database, user_id, tenant_id)
                .await?;
            if let Some(property_id) = cmd.property_id
                && tenant.property_id != property_id
            {
                return Err(EngineError::KeyNotFound(
                    "tenant not exists for property".to_string(),
                ));
            }
        }
        if let Some(account_id) = cmd.bank_account_id {
            self.require_bank_account(&self.database, user_id, account_id)
                .await?;
        }

        let model = transactions::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id.to_string()),
            property_id: ActiveValue::Set(cmd.property_id),
            tenant_id: ActiveValue::Set(cmd.tenant_id),
            bank_account_id: ActiveValue::Set(cmd.bank_account_id),
            kind: ActiveValue::Set(cmd.kind.as_str().to_string()),
            category: ActiveValue::Set(category),
            amount: ActiveValue::Set(cmd.amount.cents()),
            occurred_on: ActiveValue::Set(cmd.occurred_on),
            description: ActiveValue::Set(normalize_optional(cmd.description.as_deref())),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.database)
        .await?;

        Transaction::try_from(model)
    }

    /// Most recent first.
    pub async fn list_transactions(
        &self,
        user_id: &str,
        filter: &TransactionFilter,
    ) -> ResultEngine<Vec<Transaction>> {
        if let (Some(from), Some(to)) = (filter.from, filter.to)
            && to < from
        {
            return Err(EngineError::InvalidDate(format!(
                "range end {to} is before start {from}"
            )));
        }

        let mut query = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.to_string()));
        if let Some(property_id) = filter.property_id {
            query = query.filter(transactions::Column::PropertyId.eq(property_id));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(transactions::Column::Kind.eq(kind.as_str()));
        }
        if let Some(from) = filter.from {
            query = query.filter(transactions::Column::OccurredOn.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(transactions::Column::OccurredOn.lte(to));
        }

        query
            .order_by_desc(transactions::Column::OccurredOn)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    pub async fn delete_transaction(&self, user_id: &str, transaction_id: Uuid) -> ResultEngine<()> {
        self.require_transaction(&self.database, user_id, transaction_id)
            .await?;
        transactions::Entity::delete_by_id(transaction_id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
