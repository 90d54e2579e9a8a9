use axum::Router;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatverso_launcher::config::{APP_HOST, Config};
use chatverso_launcher::{api, utils};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatverso_launcher=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Resolve the chat server address once, before the UI is reachable
    let config = Config::resolve();
    tracing::info!(
        "chat server address resolved to {}:{}",
        config.chat_server_host,
        config.chat_server_port
    );

    let app = Router::new()
        .nest("/api", api::api_router(config.clone()))
        .nest_service("/", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http());

    print_banner(config.port);

    // Start server
    let addr = SocketAddr::from((APP_HOST, config.port));
    tracing::info!("ChatVerso launcher listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

/// Access URLs go to stdout so they stay visible regardless of log filtering.
/// The 0.0.0.0 bind address is never printed: browsers reject it.
fn print_banner(port: u16) {
    println!();
    println!("{}", "=".repeat(50));
    println!("🚀 Lançador do ChatVerso iniciado!");
    println!("Acesse no seu navegador (na mesma máquina): http://localhost:{port}");
    println!(
        "Acesse de outros dispositivos na mesma rede: {}",
        utils::net::public_url(port, "SEU_IP_DE_REDE")
    );
    println!("{}", "=".repeat(50));
    println!();
}
