//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{build_http_state, build_store};

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tracing::info;

use mood_service::Trace;
use mood_service::config::ConfigError;
#[cfg(debug_assertions)]
use mood_service::doc::ApiDoc;
use mood_service::domain::ports::MoodStoreError;
use mood_service::inbound::http::health::{HealthState, live, ready};
use mood_service::inbound::http::moods::{get_mood, set_mood};
use mood_service::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Failures that stop the process before it serves traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] MoodStoreError),
    #[error("failed to start HTTP server: {0}")]
    Io(#[from] std::io::Error),
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    body_limit: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::PayloadConfig::new(body_limit))
        .wrap(Trace)
        .service(get_mood)
        .service(set_mood)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and mark the service ready.
///
/// Signal handling is left to [`drain_on`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        http_state,
        bind_addr,
        body_limit,
    } = config;
    let http_state = web::Data::new(http_state);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone(), body_limit)
    })
    .bind(bind_addr)?
    .disable_signals()
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Wait for `signal`, fail liveness, then stop the server gracefully.
///
/// In-flight requests finish before the returned future resolves.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = ()>,
{
    signal.await;
    health_state.mark_unhealthy();
    info!("draining mood service");
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use mood_service::config::DEFAULT_BODY_LIMIT;
    use mood_service::domain::MoodService;
    use mood_service::middleware::TRACE_ID_HEADER;
    use mood_service::outbound::memory::InMemoryMoodStore;

    use super::*;

    fn app_state() -> (web::Data<HealthState>, web::Data<HttpState>) {
        let service = MoodService::new(Arc::new(InMemoryMoodStore::new()), "mood not set");
        (
            web::Data::new(HealthState::new()),
            web::Data::new(HttpState::from_service(Arc::new(service))),
        )
    }

    #[actix_web::test]
    async fn app_serves_moods_behind_trace_middleware() {
        let (health, state) = app_state();
        let app = test::init_service(build_app(health, state, DEFAULT_BODY_LIMIT)).await;

        let put = test::TestRequest::put()
            .uri("/mood/user/stehrn")
            .set_payload("happy")
            .to_request();
        let res = test::call_service(&app, put).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));

        let get = test::TestRequest::get()
            .uri("/mood/user/stehrn")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, get).await;
        assert_eq!(
            body,
            serde_json::json!({ "user": "stehrn", "mood": "happy" })
        );
    }

    #[actix_web::test]
    async fn readiness_follows_health_state() {
        let (health, state) = app_state();
        let app = test::init_service(build_app(health.clone(), state, DEFAULT_BODY_LIMIT)).await;

        let ready_request = || test::TestRequest::get().uri("/health/ready").to_request();
        let res = test::call_service(&app, ready_request()).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

        health.mark_ready();
        let res = test::call_service(&app, ready_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn moods_larger_than_the_extractor_default_are_accepted() {
        let (health, state) = app_state();
        let app = test::init_service(build_app(health, state, DEFAULT_BODY_LIMIT)).await;
        let mood = "a".repeat(300 * 1024);

        let put = test::TestRequest::put()
            .uri("/mood/user/verbose")
            .set_payload(mood.clone())
            .to_request();
        let res = test::call_service(&app, put).await;
        assert_eq!(res.status(), StatusCode::OK);

        let get = test::TestRequest::get()
            .uri("/mood/user/verbose")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, get).await;
        assert_eq!(body["mood"].as_str().map(str::len), Some(mood.len()));
    }

    #[actix_web::test]
    async fn moods_over_the_configured_limit_are_rejected() {
        let (health, state) = app_state();
        let app = test::init_service(build_app(health, state, 16)).await;

        let put = test::TestRequest::put()
            .uri("/mood/user/verbose")
            .set_payload("far too long for sixteen bytes")
            .to_request();
        let res = test::call_service(&app, put).await;
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let get = test::TestRequest::get()
            .uri("/mood/user/verbose")
            .to_request();
        let res = test::call_service(&app, get).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn draining_fails_liveness_and_stops_the_server() {
        let (health, state) = app_state();
        let config = ServerConfig::new(
            state.get_ref().clone(),
            ([127, 0, 0, 1], 0).into(),
            DEFAULT_BODY_LIMIT,
        );
        let server = create_server(health.clone(), config).expect("bind ephemeral port");
        assert!(health.is_ready());
        assert!(health.is_alive());

        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        drain_on(async {}, health.clone(), handle).await;

        assert!(!health.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
