use clap::Parser;
use driftdns_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "driftdns")]
#[command(version)]
#[command(about = "Drift DNS - dynamic DNS service backed by a wire-protocol key-value store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Key-value store port
    #[arg(short = 's', long)]
    store_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        store_port: cli.store_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Drift DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new();

    // Store server
    let store_addr = format!(
        "{}:{}",
        config.server.bind_address, config.server.store_port
    );
    let store_server =
        server::bind_store_server(&store_addr, services.engine.clone(), &config.store).await?;
    tokio::spawn(async move {
        if let Err(e) = store_server.run().await {
            error!(error = %e, "Store server error");
        }
    });

    // DNS server
    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let dns_handler =
        driftdns_infrastructure::dns::DnsServerHandler::new(services.resolve_host.clone());
    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, dns_handler).await {
            error!(error = %e, "DNS server error");
        }
    });

    // Web server (blocks until shutdown)
    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()?;
    let app_state = driftdns_api::AppState {
        update_address: services.update_address,
        list_records: services.list_records,
    };

    tokio::select! {
        result = server::start_web_server(web_addr, app_state) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
