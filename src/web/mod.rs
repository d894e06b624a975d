//! Web layer module
//!
//! This module provides the HTTP interface for the clinic. Handlers are thin
//! and delegate to [`ClinicService`] for business logic.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers organized by resource
//! - **Extractors**: wire message decoding and response format negotiation
//! - **Responses**: encoded replies and the error-to-status mapping
//! - **Middleware**: request logging
//!
//! Every resource route is nested under `web.base_path`; the health check
//! stays at the root.

use anyhow::Result;
use axum::{
    http::{header, HeaderName},
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{config::Config, database::Database, services::ClinicService};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;

// Re-export commonly used types
pub use extractors::{ApiPath, OwnerSearchParams, RequestContext, Wire};
pub use responses::Reply;

use handlers::{health, owners, pet_types, pets, specialties, vets, visits};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, database: Database) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState::new(config, database));

        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Listening on http://{}", self.addr);
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let base_path = state.config.web.base_path.trim_end_matches('/').to_string();

    let router = Router::new().route("/health", get(health::health_check));

    // Nesting at the root is not allowed, so an empty base path merges
    let router = if base_path.is_empty() {
        router.merge(api_routes())
    } else {
        router.nest(&base_path, api_routes())
    };

    router
        // Middleware (applied in reverse order)
        .layer(cors_layer())
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static("errors"), header::CONTENT_TYPE])
}

/// Resource routes, relative to the base path
fn api_routes() -> Router<AppState> {
    Router::new()
        // Owners and their pets
        .route(
            "/owners",
            get(owners::list_owners).post(owners::create_owner),
        )
        .route(
            "/owners/:owner_id",
            get(owners::get_owner)
                .put(owners::update_owner)
                .delete(owners::delete_owner),
        )
        .route("/owners/:owner_id/pets", post(owners::add_pet_to_owner))
        .route("/owners/:owner_id/:pet_id", get(owners::get_owner_pet))
        .route(
            "/owners/:owner_id/pets/:pet_id/visits",
            post(owners::add_visit_to_owner_pet),
        )
        // Pets
        .route("/pets", get(pets::list_pets).post(pets::create_pet))
        .route(
            "/pets/:pet_id",
            get(pets::get_pet)
                .put(pets::update_pet)
                .delete(pets::delete_pet),
        )
        // Pet types
        .route(
            "/pettypes",
            get(pet_types::list_pet_types).post(pet_types::create_pet_type),
        )
        .route(
            "/pettypes/:pet_type_id",
            get(pet_types::get_pet_type)
                .put(pet_types::update_pet_type)
                .delete(pet_types::delete_pet_type),
        )
        // Specialties, action style
        .route("/listSpecialties", get(specialties::list_specialties))
        .route("/getSpecialty/:specialty_id", get(specialties::get_specialty))
        .route("/addSpecialty", post(specialties::create_specialty))
        .route(
            "/updateSpecialty/:specialty_id",
            put(specialties::update_specialty_returning),
        )
        .route(
            "/deleteSpecialty/:specialty_id",
            axum::routing::delete(specialties::delete_specialty),
        )
        // Specialties, resource style
        .route(
            "/specialties",
            get(specialties::list_specialties).post(specialties::create_specialty),
        )
        .route(
            "/specialties/:specialty_id",
            get(specialties::get_specialty)
                .put(specialties::update_specialty)
                .delete(specialties::delete_specialty),
        )
        // Vets
        .route("/vets", get(vets::list_vets).post(vets::create_vet))
        .route(
            "/vets/:vet_id",
            get(vets::get_vet)
                .put(vets::update_vet)
                .delete(vets::delete_vet),
        )
        // Visits
        .route(
            "/visits",
            get(visits::list_visits).post(visits::create_visit),
        )
        .route(
            "/visits/:visit_id",
            get(visits::get_visit)
                .put(visits::update_visit)
                .delete(visits::delete_visit),
        )
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub config: Config,
    pub clinic: ClinicService,
}

impl AppState {
    pub fn new(config: Config, database: Database) -> Self {
        Self {
            clinic: ClinicService::new(database.pool()),
            database,
            config,
        }
    }
}
