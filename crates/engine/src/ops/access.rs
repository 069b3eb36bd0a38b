//! Ownership checks shared by every operation.
//!
//! A record that exists but belongs to another user is reported as missing.

use sea_orm::{ConnectionTrait, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, bank_accounts, documents, maintenance, properties, prospects,
    scenarios, service_providers, tenants, transactions,
};

use super::Engine;

/// Generates a `require_*` lookup returning the owned model or `KeyNotFound`.
macro_rules! impl_require_owned {
    ($require_fn:ident, $entity:ident, $err_msg:literal) => {
        pub(super) async fn $require_fn<C: ConnectionTrait>(
            &self,
            db: &C,
            user_id: &str,
            id: Uuid,
        ) -> ResultEngine<$entity::Model> {
            $entity::Entity::find_by_id(id)
                .filter($entity::Column::UserId.eq(user_id.to_string()))
                .one(db)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound($err_msg.to_string()))
        }
    };
}

impl Engine {
    impl_require_owned!(require_property, properties, "property not exists");
    impl_require_owned!(require_prospect, prospects, "prospect not exists");
    impl_require_owned!(require_tenant, tenants, "tenant not exists");
    impl_require_owned!(require_transaction, transactions, "transaction not exists");
    impl_require_owned!(require_maintenance, maintenance, "maintenance record not exists");
    impl_require_owned!(require_document, documents, "document not exists");
    impl_require_owned!(require_scenario, scenarios, "scenario not exists");
    impl_require_owned!(require_bank_account, bank_accounts, "bank account not exists");
    impl_require_owned!(
        require_service_provider,
        service_providers,
        "service provider not exists"
    );

    /// Validate an optional property link.
    pub(super) async fn require_optional_property<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        property_id: Option<Uuid>,
    ) -> ResultEngine<()> {
        if let Some(id) = property_id {
            self.require_property(db, user_id, id).await?;
        }
        Ok(())
    }
}
