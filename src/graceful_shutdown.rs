use actix_web::dev::ServerHandle;
use tokio::signal;
use tracing::{info, warn};

/// Waits for Ctrl+C or SIGTERM and asks the server to drain in-flight
/// requests before stopping.
pub async fn shutdown_on_signal(handle: ServerHandle) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("🛑 Ctrl+C received, draining connections..."),
        _ = terminate => warn!("🛑 SIGTERM received, draining connections..."),
    }

    handle.stop(true).await;
    info!("Server stopped");
}
