//! Movie Explorer server binary.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_explorer::adapters::auth::{JwtConfig, JwtTokenService};
use movie_explorer::adapters::fcm::{FcmConfig, FcmPushAdapter, NoopPushGateway};
use movie_explorer::adapters::http::{build_router, AppState};
use movie_explorer::adapters::postgres::{
    PostgresMovieRepository, PostgresSubscriptionRepository, PostgresTokenBlacklist,
    PostgresUserRepository, PostgresWishlistRepository,
};
use movie_explorer::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use movie_explorer::application::handlers::subscription::CheckoutUrls;
use movie_explorer::config::AppConfig;
use movie_explorer::domain::foundation::Timestamp;
use movie_explorer::ports::{PushGateway, TokenBlacklist};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    info!("Connected to PostgreSQL");

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let subscriptions = Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
    let movies = Arc::new(PostgresMovieRepository::new(pool.clone()));
    let wishlists = Arc::new(PostgresWishlistRepository::new(pool.clone()));
    let blacklist = Arc::new(PostgresTokenBlacklist::new(pool.clone()));

    let purged = blacklist.purge_expired(Timestamp::now()).await?;
    if purged > 0 {
        info!(purged, "Purged expired blacklisted tokens");
    }

    let token_service = Arc::new(JwtTokenService::new(
        JwtConfig::new(config.auth.jwt_secret.clone()).with_ttl_days(config.auth.token_ttl_days),
        users.clone(),
        blacklist.clone(),
    ));

    let payment_provider = Arc::new(StripePaymentAdapter::new(
        StripeConfig::new(config.payment.stripe_api_key.clone()).with_prices(
            config.payment.stripe_price_gold.clone(),
            config.payment.stripe_price_platinum.clone(),
        ),
    ));

    let push_gateway: Arc<dyn PushGateway> = if config.push.enabled {
        Arc::new(FcmPushAdapter::new(FcmConfig::new(
            config.push.fcm_project_id.clone(),
            config.push.fcm_client_email.clone(),
            config.push.fcm_private_key.clone(),
        )))
    } else {
        info!("Push notifications disabled");
        Arc::new(NoopPushGateway)
    };

    let state = AppState {
        users: users.clone(),
        subscriptions,
        movies,
        wishlists,
        blacklist,
        payment_provider,
        push_gateway,
        session_validator: token_service.clone(),
        token_issuer: token_service,
        plan_schedule: config.payment.plan_schedule(),
        checkout_urls: CheckoutUrls {
            success_url: config.payment.success_url.clone(),
            cancel_url: config.payment.cancel_url.clone(),
        },
        expiry_policy: config.payment.expiry_policy,
    };

    let router = build_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
