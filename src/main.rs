mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::sync::Arc;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    infrastructure::{
        activity_repository::PostgresActivityRepository,
        supabase_auth_provider::SupabaseAuthProvider,
    },
    presentation::handlers::signup_handler::create_signup_router,
    usecase::signup_usecase::SignupUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);
    let db = Database::connect(opt).await?;

    let activity_repository = PostgresActivityRepository::new(Arc::new(db));
    let auth_provider = SupabaseAuthProvider::new(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
        config.auth_timeout,
    )?;
    let signup_usecase = SignupUsecase::new(auth_provider, activity_repository);

    let app = Router::new()
        .merge(create_signup_router(signup_usecase, config.site_url.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
