use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use similar_products_api::{
    config::AppConfig, routes::create_app, state::AppState, upstream::UpstreamClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,similar_products_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let upstream = UpstreamClient::new(&config.upstream)?;
    tracing::info!(
        base_url = %config.upstream.base_url,
        connect_timeout_ms = %config.upstream.connect_timeout.as_millis(),
        timeout_ms = %config.upstream.timeout.as_millis(),
        "upstream client ready"
    );

    let app = create_app(AppState::new(upstream));

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
