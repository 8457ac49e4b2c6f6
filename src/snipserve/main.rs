use clap::Parser;

use snipserve::config::ServerConfig;
use snipserve::server::{self, AppState};
use snipserve::store::memory::MemoryStore;

mod args;
use args::Cli;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> std::io::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.host, cli.port, cli.production);

    // The store is built once here, seeded, and shared with the handlers.
    let state = AppState::new(MemoryStore::seeded(), config.environment);
    let app = server::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    println!(
        "snipserve running at http://{} ({})",
        listener.local_addr()?,
        config.environment.as_str()
    );

    axum::serve(listener, app).await
}
