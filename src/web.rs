use std::future::{pending, Future};
use std::io;
use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::model::{self, LinearRegression};
use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};

mod extract;
mod middleware;
pub mod models;
mod views;

/// Loads the model and serves the predictions until a shutdown signal is received.
pub async fn run(opts: WebOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "web"));

    let model = Arc::new(model::load(&opts.model.path, opts.model.format)?);
    let app = create_app(model);

    info!(%opts.host, opts.port, "listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(app, shutdown_signal(), None)
        .await?;
    info!("the server has stopped");
    Ok(())
}

pub fn create_app(model: Arc<LinearRegression>) -> impl Endpoint {
    Route::new()
        .at("/predict", post(views::predict::post_predict))
        .at("/health", get(views::health::get_health))
        .data(model)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c(), terminate_signal()).await;
}

#[cfg(unix)]
async fn terminate_signal() -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    signal(SignalKind::terminate())?.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate_signal() -> io::Result<()> {
    pending().await
}

/// Resolves on the first delivered signal.
/// A signal which could not be listened for never resolves, so that the server keeps running.
async fn wait_for_shutdown(
    ctrl_c: impl Future<Output = io::Result<()>>,
    terminate: impl Future<Output = io::Result<()>>,
) {
    tokio::select! {
        () = listen_for("Ctrl-C", ctrl_c) => {}
        () = listen_for("SIGTERM", terminate) => {}
    }
}

async fn listen_for(name: &'static str, signal: impl Future<Output = io::Result<()>>) {
    match signal.await {
        Ok(()) => info!(name, "shutdown signal received"),
        Err(error) => {
            error!(name, "failed to listen for the shutdown signal: {:#}", error);
            pending::<()>().await;
        }
    }
}
