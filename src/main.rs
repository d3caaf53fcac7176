use rusty_library_lending::{
    adapters::{memory::in_memory_dependencies, seed},
    api::{handlers::AppState, router::create_router},
    domain::LendingPolicy,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 環境変数から数値を読む。未設定・不正な値ならデフォルトを使う。
fn env_or<T: std::str::FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_lending=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let defaults = LendingPolicy::default();
    let policy = LendingPolicy::new(
        env_or("LOAN_PERIOD_DAYS", defaults.loan_period_days),
        env_or("CHECKOUT_LIMIT", defaults.checkout_limit),
        defaults.fine_per_day,
    )
    .unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "Invalid lending policy, using defaults");
        defaults
    });
    tracing::info!(
        loan_period_days = policy.loan_period_days,
        checkout_limit = policy.checkout_limit,
        "Lending policy"
    );

    // Initialize adapters
    let mut deps = in_memory_dependencies(policy);
    seed::populate(&mut *deps.catalog);

    // Create application state and router
    let app_state = Arc::new(AppState::new(deps));
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!(%addr, "Server listening");

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
