use anyhow::Result;

use decora_backend::services::Mailer;
use decora_backend::{app, auth, config, db, logging, services, store};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting Decora backend"
    );

    // Create database pool and apply migrations
    let pool = db::create_pool(&settings).await?;
    db::run_migrations(&pool).await?;

    // Seed the bootstrap admin account when configured
    if let (Some(email), Some(password)) = (
        &settings.bootstrap_admin_email,
        &settings.bootstrap_admin_password,
    ) {
        let hash = auth::password::hash_password(password)
            .map_err(|e| anyhow::anyhow!("Failed to hash bootstrap admin password: {e}"))?;
        if store::admins::create_if_absent(&pool, email, &hash).await? {
            tracing::info!(email = %email, "Bootstrap admin account created");
        }
    }

    // Build the contact-notification mailer when SMTP is configured
    let mailer = match (&settings.smtp, &settings.notify_email_to) {
        (Some(smtp), Some(to)) => match Mailer::new(smtp, to.clone()) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build mailer, notifications will be logged only");
                None
            }
        },
        _ => {
            tracing::info!(
                "SMTP or NOTIFY_EMAIL_TO not configured, notifications will be logged only"
            );
            None
        }
    };

    // Spawn the notification worker
    let notifications = services::spawn_notification_worker(mailer);

    // Create application state
    let state = app::AppState::new(pool, settings.clone(), notifications);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
