use driftdns_domain::config::StoreConfig;
use driftdns_infrastructure::store::{StoreEngine, StoreServer};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn bind_store_server(
    bind_addr: &str,
    engine: Arc<StoreEngine>,
    config: &StoreConfig,
) -> anyhow::Result<StoreServer> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!(bind_address = %listener.local_addr()?, "Store server bound");
    Ok(StoreServer::new(listener, engine, config))
}
