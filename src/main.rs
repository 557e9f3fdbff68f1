mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    tracing::info!(
        public_dir = %config.public_dir.display(),
        site_root = %leptos_options.site_root,
        "static assets configured"
    );

    let app = routes::app(leptos_options, &config.public_dir);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "myboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
