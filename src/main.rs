use mcp_todo_server::config::ServerConfig;
use mcp_todo_server::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-todo-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(config).await {
        eprintln!("mcp-todo-server: fatal error: {e}");
        std::process::exit(1);
    }
}
