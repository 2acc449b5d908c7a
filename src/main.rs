use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mediport::server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    let http_port: u16 = std::env::var("MEDIPORT_HTTP_PORT")
        .unwrap_or_else(|_| "7979".to_string())
        .parse()
        .unwrap_or(7979);
    let data_root = std::env::var("MEDIPORT_DATA_FOLDER").unwrap_or_else(|_| "data".to_string());
    let directory_url = std::env::var("MEDIPORT_DIRECTORY_URL").unwrap_or_default();
    let directory_key = std::env::var("MEDIPORT_DIRECTORY_KEY").unwrap_or_default();
    info!(
        target: "mediport",
        "mediport starting: RUST_LOG='{}', http_port={}, data_root='{}', directory_url='{}'",
        rust_log,
        http_port,
        data_root,
        if directory_url.is_empty() { "<demo>" } else { &directory_url }
    );

    mediport::server::run(ServerConfig { http_port, data_root, directory_url, directory_key }).await
}
