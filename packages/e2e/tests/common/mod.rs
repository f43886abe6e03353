use std::time::Duration;

use api::{Backend, NewUser, TestingService, UserService};
use e2e::{FakeBackend, DEMO_USERS};
use store::{ClientConfig, MemoryStore};
use tracing_subscriber::EnvFilter;
use ui::BlogApp;

pub const NOTIFICATION: Duration = Duration::from_millis(400);

/// Start a backend, reset it and register the demo users through the API.
pub async fn start_backend() -> FakeBackend {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let backend = FakeBackend::spawn().await.unwrap();
    let client = Backend::new(backend.base_url());

    TestingService::new(client.clone()).reset().await.unwrap();
    let users = UserService::new(client);
    for (name, username, password) in DEMO_USERS {
        users
            .register(&NewUser::new(name, username, password))
            .await
            .unwrap();
    }
    backend
}

pub fn open_app(base_url: &str, store: MemoryStore) -> BlogApp<MemoryStore> {
    let config = ClientConfig::new(base_url).with_notification_duration(NOTIFICATION);
    BlogApp::from_config(&config, store)
}

pub async fn message(app: &BlogApp<MemoryStore>) -> Option<String> {
    app.snapshot()
        .await
        .notification()
        .map(|n| n.message.clone())
}

/// Titles in render order.
pub async fn titles(app: &BlogApp<MemoryStore>) -> Vec<String> {
    app.snapshot()
        .await
        .visible_blogs()
        .into_iter()
        .map(|row| row.blog.title)
        .collect()
}

pub async fn blog_id(app: &BlogApp<MemoryStore>, title: &str) -> String {
    app.snapshot()
        .await
        .visible_blogs()
        .into_iter()
        .find(|row| row.blog.title == title)
        .map(|row| row.blog.id)
        .unwrap()
}
