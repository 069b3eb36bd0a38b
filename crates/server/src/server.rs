use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use std::{net::SocketAddr, sync::Arc};

use crate::{
    actions, budget, directory, documents, feedback, maintenance, properties, prospects,
    revalidate::{self, Revalidator},
    scenarios, summary, tenants, transactions,
};
use engine::{Engine, users};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub db: DatabaseConnection,
    pub revalidator: Arc<Revalidator>,
}

impl ServerState {
    pub fn new(engine: Engine, db: DatabaseConnection) -> Self {
        Self {
            engine: Arc::new(engine),
            db,
            revalidator: Arc::new(Revalidator::new()),
        }
    }
}

async fn auth(
    auth_header: TypedHeader<Authorization<Basic>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user = users::Entity::find()
        .filter(users::Column::Username.eq(auth_header.username()))
        .filter(users::Column::Password.eq(auth_header.password()))
        .one(&state.db)
        .await
        .map_err(|err| {
            tracing::error!("failed to look up user: {err}");
            StatusCode::UNAUTHORIZED
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Every route, behind basic auth and conditional GET handling.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/properties",
            get(properties::list).post(properties::create),
        )
        .route(
            "/properties/{id}",
            get(properties::get)
                .patch(properties::update)
                .delete(properties::remove),
        )
        .route(
            "/properties/{id}/neighbors",
            get(directory::list_neighbors).post(directory::create_neighbor),
        )
        .route("/neighbors/{id}", delete(directory::delete_neighbor))
        .route(
            "/properties/{id}/codes",
            get(directory::list_codes).post(directory::create_code),
        )
        .route("/codes/{id}", delete(directory::delete_code))
        .route("/prospects", get(prospects::list).post(prospects::create))
        .route(
            "/prospects/{id}",
            get(prospects::get)
                .patch(prospects::update)
                .delete(prospects::remove),
        )
        .route("/prospects/{id}/convert", post(prospects::convert))
        .route("/tenants", get(tenants::list).post(tenants::create))
        .route(
            "/tenants/{id}",
            get(tenants::get)
                .patch(tenants::update)
                .delete(tenants::remove),
        )
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/transactions/{id}", delete(transactions::remove))
        .route(
            "/maintenance",
            get(maintenance::list).post(maintenance::create),
        )
        .route(
            "/maintenance/{id}",
            axum::routing::patch(maintenance::update).delete(maintenance::remove),
        )
        .route("/documents", get(documents::list))
        .route("/documents/{id}", get(documents::get))
        .route("/actions/documents", post(actions::create))
        .route("/actions/documents/{id}", delete(actions::delete))
        .route("/scenarios", get(scenarios::list).post(scenarios::create))
        .route(
            "/scenarios/{id}",
            get(scenarios::get).delete(scenarios::remove),
        )
        .route("/scenarios/{id}/analysis", get(scenarios::analysis))
        .route("/feedback", get(feedback::list).post(feedback::create))
        .route("/feedback/{id}/resolve", post(feedback::resolve))
        .route(
            "/bank-accounts",
            get(directory::list_bank_accounts).post(directory::create_bank_account),
        )
        .route("/bank-accounts/{id}", delete(directory::delete_bank_account))
        .route(
            "/service-providers",
            get(directory::list_service_providers).post(directory::create_service_provider),
        )
        .route(
            "/service-providers/{id}",
            delete(directory::delete_service_provider),
        )
        .route("/budget", get(budget::list).post(budget::create))
        .route("/budget/report", get(budget::report))
        .route("/budget/{id}", delete(budget::remove))
        .route("/summary", get(summary::get))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            revalidate::conditional_get,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

pub async fn run(engine: Engine, db: DatabaseConnection, addr: SocketAddr) {
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, db, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine, db))).await
}

pub fn spawn_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, db, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
