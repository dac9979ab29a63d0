//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::TaskService;
use backend::domain::ports::InMemoryTaskRepository;
use backend::inbound::http::dashboard::today_summary;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::tasks::{create_task, delete_task, get_task, list_tasks, update_task};
use backend::outbound::persistence::DieselTaskRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the HTTP state from configuration.
///
/// Uses the Diesel-backed repository when a pool is available, otherwise
/// falls back to the in-memory store so the server stays usable without a
/// database (data is lost on restart).
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let service = Arc::new(TaskService::new(Arc::new(DieselTaskRepository::new(
                pool.clone(),
            ))));
            HttpState::new(service.clone(), service)
        }
        None => {
            warn!("no database configured; using the in-memory task store");
            let service = Arc::new(TaskService::new(Arc::new(InMemoryTaskRepository::new())));
            HttpState::new(service.clone(), service)
        }
    }
}

/// CORS policy for the API scope.
///
/// The original deployment serves the browser client from a separate origin,
/// so the API stays permissive unless an explicit origin is configured.
fn build_cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_header(actix_web::http::header::CONTENT_TYPE)
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_allowed_origin: Option<String>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_allowed_origin,
    } = deps;

    let api = web::scope("/api")
        .wrap(build_cors(cors_allowed_origin.as_deref()))
        .service(list_tasks)
        .service(today_summary)
        .service(get_task)
        .service(create_task)
        .service(update_task)
        .service(delete_task);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state flipped once the server is wired.
/// - `config`: pre-built [`ServerConfig`] with binding, store, and CORS
///   settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        db_pool: _,
        cors_allowed_origin,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            cors_allowed_origin: cors_allowed_origin.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
