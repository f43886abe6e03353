use std::env;

use e2e::{router, Db, DEMO_USERS};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_ADDR: &str = "127.0.0.1:3003";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let address = env::var("FAKE_BACKEND_ADDR").unwrap_or_else(|_| {
        info!("FAKE_BACKEND_ADDR not set, using default: {DEFAULT_ADDR}");
        DEFAULT_ADDR.to_string()
    });

    let db = Db::shared();
    {
        let mut db = db.lock().await;
        for (name, username, password) in DEMO_USERS {
            if let Err(e) = db.add_user(name, username, password) {
                warn!("Failed to seed {username}: {e}");
            }
        }
    }

    let listener = TcpListener::bind(&address).await?;
    info!("Fake backend running on {address}");

    axum::serve(listener, router(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Fake backend shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {e}");
    }
}
