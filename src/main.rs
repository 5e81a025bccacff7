use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use goholiday_web::announcements::AnnouncementService;
use goholiday_web::auth::{session::start_session_purger, PgAdminAuth};
use goholiday_web::bookings::BookingService;
use goholiday_web::cache::AppCache;
use goholiday_web::config::Config;
use goholiday_web::db;
use goholiday_web::ratelimit::{start_limiter_purger, RateLimiter};
use goholiday_web::translate::PassthroughTranslator;
use goholiday_web::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goholiday_web=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::connect(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db::migrate(&pool).await?;

    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        if db::admins::ensure_admin(&pool, email, password).await? {
            tracing::info!(%email, "Bootstrap admin created");
        }
    }

    let cache = AppCache::new();
    let auth = Arc::new(PgAdminAuth::new(pool.clone()));
    let limiter = Arc::new(RateLimiter::new(
        Duration::from_secs(config.rate_limit_window_secs),
        config.rate_limit_max,
    ));

    let state = AppState {
        bookings: Arc::new(BookingService::new(
            Arc::new(db::PgBookingStore::new(pool.clone())),
            auth.clone(),
        )),
        announcements: Arc::new(AnnouncementService::new(
            Arc::new(db::PgAnnouncementStore::new(pool.clone())),
            auth.clone(),
            Arc::new(PassthroughTranslator),
            cache.clone(),
        )),
        auth: auth.clone(),
        limiter: limiter.clone(),
        cache,
    };

    tokio::spawn(start_session_purger(auth));
    tokio::spawn(start_limiter_purger(limiter));

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
