// Server lifecycle.
//
// - The listener is served on its own task.
// - The caller's flow waits on a shutdown trigger (an OS signal in production).
// - On trigger the server stops accepting and drains in-flight requests,
//   bounded by a fixed timeout. Past the deadline the server task is aborted.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    Graceful,
    TimedOut,
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

pub async fn run<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    timeout: Duration,
) -> Result<ShutdownOutcome, ServerError>
where
    F: Future<Output = ()> + Send,
{
    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "listening"),
        Err(error) => tracing::warn!(%error, "listening on an unknown address"),
    }

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            let _ = stop_rx.await;
        })
        .await
    });

    tokio::select! {
        () = shutdown => {}
        joined = &mut server => {
            joined?.map_err(ServerError::Serve)?;
            return Ok(ShutdownOutcome::Graceful);
        }
    }

    tracing::info!("Shutdown Server ...");
    let _ = stop_tx.send(());

    match tokio::time::timeout(timeout, &mut server).await {
        Ok(joined) => {
            joined?.map_err(ServerError::Serve)?;
            tracing::info!("server exited");
            Ok(ShutdownOutcome::Graceful)
        }
        Err(_) => {
            tracing::warn!(?timeout, "graceful shutdown timed out, aborting in-flight requests");
            server.abort();
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
