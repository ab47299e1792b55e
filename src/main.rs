use pressroom::server::{self, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> pressroom::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_address =
        std::env::var("PRESSROOM_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    server::start_server(&bind_address, AppState::new()).await
}
