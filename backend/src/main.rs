//! Mood service entry-point: loads settings, connects the store, and serves HTTP.

mod server;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mood_service::config::MoodSettings;
use mood_service::inbound::http::health::HealthState;

use server::{ServerConfig, StartupError, build_http_state, build_store, create_server, drain_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    run().await.map_err(|err| {
        error!(error = %err, "mood service failed");
        std::io::Error::other(err)
    })
}

async fn run() -> Result<(), StartupError> {
    let settings = MoodSettings::from_process()?;
    let bind_addr = settings.bind_addr()?;
    let store = build_store(&settings).await?;
    let http_state = build_http_state(store, &settings);

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(http_state, bind_addr, settings.body_limit);
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, body_limit = settings.body_limit, "mood service listening");

    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await?;
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(err) => warn!(error = %err, "SIGTERM handler unavailable"),
        }
    }

    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
