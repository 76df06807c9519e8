use sssp_compare::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Port from the first argument, then the PORT environment variable.
    let port = env::args()
        .nth(1)
        .or_else(|| env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    start_server(config).await
}
