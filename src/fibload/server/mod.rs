use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use fibload_lib::constants::ACCEPT_BACKOFF;
use fibload_lib::ctx;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use log::debug;
use log::error;
use log::info;
use log::warn;
use tokio::net::TcpListener;
use tokio::time::sleep;

use self::router::Router;

/// Validation of the `n` query string parameter.
pub mod query;

/// The explicit route table and the request handlers.
pub mod router;

/// Rendering of the accumulated profile.
pub mod profile;

/// Bind the listening socket.
pub async fn bind(address: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(address).await.with_context(ctx!(
        "Could not listen on {address}", ;
        "Ensure that the address is local and the port is not already taken",
    ))
}

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Every connection is served on its own task, every computation on its own
/// thread, so a slow request never holds up the others.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(connection) => connection,
                Err(e) => {
                    warn!("Could not accept a connection: {e}");
                    sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            },

            _ = &mut shutdown => {
                info!("Shutting down");
                return Ok(());
            }
        };

        debug!("Accepted a connection from {peer}");

        let router = router.clone();

        tokio::spawn(async move {
            let service = service_fn(move |request: Request<Incoming>| {
                let router = router.clone();
                async move { Ok::<_, Infallible>(router.handle(request.uri()).await) }
            });

            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                debug!("Connection with {peer} ended with an error: {e}");
            }
        });
    }
}

/// Resolves on Ctrl-C.
///
/// If the signal handler cannot be installed this never resolves, the
/// process then has to be stopped by other means.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
