pub mod handlers;
pub mod routes;
pub mod shared;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::logger::init_tracing()?;

    let config = shared::config::load_config()?;
    let addr = config.bind_addr()?;

    tracing::info!(
        "Broadway {} serving app assets from {} and bundle from {}",
        contracts::shared::app_info::APP_VERSION,
        config.app_dir().display(),
        config.dist_dir().display()
    );

    let app = routes::configure_routes(&config);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
