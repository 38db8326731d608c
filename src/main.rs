use staff_board::{
    api::{ApiState, HttpBoardApi},
    config::{AppConfig, Env},
    visibility, Session,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the client: loads configuration, sets up
/// logging, binds the HTTP collaborator and drives one session through a login
/// followed by a role-filtered view of the navigation and the board.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to a sensible local default.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "staff_board=debug".into());

    // 3. Initialize Logging based on Environment
    // Pretty output for local debugging, JSON for log aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Client starting in {:?} mode", config.env);
    tracing::info!("Collaborator endpoint: {}", config.api_base_url);

    // 4. Collaborator & Session Initialization
    // One shared HTTP client, one Anonymous session for this process.
    let api = Arc::new(HttpBoardApi::new(&config.api_base_url)) as ApiState;
    let mut session = Session::new(api);

    // 5. Login from Environment Credentials
    // Without credentials the session stays Anonymous, and the visibility
    // filter below shows nothing.
    let email = std::env::var("BOARD_EMAIL").unwrap_or_default();
    let password = std::env::var("BOARD_PASSWORD").unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        tracing::warn!("BOARD_EMAIL / BOARD_PASSWORD not set; staying anonymous");
    } else if let Err(e) = session.login(&email, &password).await {
        tracing::error!("{e}");
        return;
    }

    // 6. Role-Filtered Navigation
    for item in visibility::visible_nav_items(session.current_user()) {
        tracing::info!(href = item.href, "nav item: {}", item.label);
    }

    // 7. Visible Board Content
    // Skip the fetch entirely when Anonymous: the filter would discard it all.
    if session.is_authenticated() {
        match session.visible_posts().await {
            Ok(posts) => {
                tracing::info!("{} visible post(s)", posts.len());
                for post in posts {
                    tracing::info!(
                        department = %post.department,
                        author = %post.author.name,
                        created_at = %post.created_at,
                        "{}",
                        post.content
                    );
                }
            }
            Err(e) => tracing::error!("{e}"),
        }
    }
}
