//! Web server exposing the bin dataset.
//!
//! Two JSON endpoints over the immutable in-memory dataset:
//! - `/api/bins` lists every bin in load order
//! - `/api/bins/nearest?lat=..&lng=..` returns the nearest bin with
//!   distance and bearing

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::dataset::BinSet;

/// Shared state for the web server.
///
/// The dataset never changes after startup, so an `Arc` with no lock is
/// all the sharing concurrent requests need.
#[derive(Clone)]
pub struct AppState {
    pub bins: Arc<BinSet>,
}

/// Start the web server over an already-loaded dataset.
pub async fn serve(bins: BinSet, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState {
        bins: Arc::new(bins),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
