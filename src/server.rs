use std::{io, net::SocketAddr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::{sync::oneshot, task::JoinHandle};

use crate::{api, error::AuthError};

/// Handle to the running login server.
pub struct CallbackServer {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<io::Result<()>>,
}

impl CallbackServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for in-flight responses.
    pub async fn shutdown(self) -> Result<(), AuthError> {
        let _ = self.shutdown.send(());
        match self.handle.await {
            Ok(result) => result.map_err(AuthError::Server),
            Err(e) => Err(AuthError::Server(io::Error::other(e))),
        }
    }
}

pub fn router(state: Arc<api::CallbackState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

/// Binds `addr` and serves the login endpoints in a background task.
pub async fn start_api_server(
    addr: &str,
    state: Arc<api::CallbackState>,
) -> Result<CallbackServer, AuthError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let (shutdown, signal) = oneshot::channel::<()>();

    let app = router(state);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = signal.await;
            })
            .await
    });

    Ok(CallbackServer {
        local_addr,
        shutdown,
        handle,
    })
}
