use gate_server::{Config, Server, init_logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    init_logger();

    print_banner();

    tracing::info!("🛡️  Gate server starting...");

    // 2. Load configuration (fails closed when JWT_SECRET is unset)
    let config = Config::from_env()?;

    // 3. Run the HTTP server
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
