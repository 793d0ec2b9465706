use database::{db::create_connection, session_store::SeaOrmSessionStore};
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{app, config::Config, state::AppState, utils::shutdown::shutdown_signal};
use std::{error::Error, time::Duration};

/// How often expired sessions are swept from the database
const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    env_logger::init();

    let db = create_connection(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    info!("Database migrations applied");

    let deletion_task = tokio::spawn(
        SeaOrmSessionStore::new(db.clone()).continuously_delete_expired(SESSION_SWEEP_PERIOD),
    );

    let state = AppState::new(db)?;
    let app = app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    deletion_task.abort();

    Ok(())
}
