use driftdns_api::{create_routes, AppState};
use std::net::SocketAddr;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        update_url = format!("http://{}/nic/update", bind_addr),
        "Starting web server"
    );

    let app = create_routes(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    // into_make_service_with_connect_info so handlers can see the peer
    // address for the myip fallback.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
