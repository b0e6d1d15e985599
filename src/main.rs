use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use openai_chat_backend::routes;
use openai_chat_backend::services::chat::ChatService;
use openai_chat_backend::services::openai::OpenAiConfig;
use openai_chat_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // One client for the life of the process. A missing API key is fatal
    // here, before the listener ever opens.
    let config = OpenAiConfig::from_env();
    let chat = ChatService::new(&config)?;
    let state = Arc::new(AppState::new(chat));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("chat backend listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
