use clap::Parser;
use tokio::net::TcpListener;
use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::parse();
    let store = config.open_store()?;
    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    todo_server::run(listener, store).await?;
    Ok(())
}
