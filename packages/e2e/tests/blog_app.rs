mod common;

use api::{ApiError, Backend, BlogService, Credential};
use common::{blog_id, message, open_app, start_backend, titles, NOTIFICATION};
use store::{MemoryStore, SessionStore, User};
use ui::NotificationKind;

#[tokio::test]
async fn test_login_form_is_shown_at_start() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.restore().await;

    let state = app.snapshot().await;
    assert!(!state.is_authenticated());
    assert!(state.notification().is_none());
    assert!(state.visible_blogs().is_empty());
}

#[tokio::test]
async fn test_login_succeeds_with_correct_credentials() {
    let backend = start_backend().await;
    let store = MemoryStore::new();
    let app = open_app(&backend.base_url(), store.clone());

    app.login("aleksandar", "sifra").await;

    let state = app.snapshot().await;
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Aleksandar Prodanic"));
    assert!(state.login_form.username.is_empty());
    assert!(state.login_form.password.is_empty());
    let saved = SessionStore::new(store).load().unwrap();
    assert_eq!(saved.username, "aleksandar");
}

#[tokio::test]
async fn test_login_fails_with_wrong_password() {
    let backend = start_backend().await;
    let store = MemoryStore::new();
    let app = open_app(&backend.base_url(), store.clone());

    app.login("aleksandar", "wrong").await;

    let state = app.snapshot().await;
    assert!(!state.is_authenticated());
    let notification = state.notification().unwrap();
    assert_eq!(notification.message, "Wrong credentials");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(SessionStore::new(store).load().is_none());

    tokio::time::sleep(NOTIFICATION * 2).await;
    assert_eq!(message(&app).await, None);
}

#[tokio::test]
async fn test_unreachable_backend_is_reported_as_retryable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let app = open_app(&format!("http://127.0.0.1:{port}"), MemoryStore::new());

    app.login("aleksandar", "sifra").await;

    assert_eq!(
        message(&app).await.as_deref(),
        Some("Login failed: server unreachable, try again")
    );
    assert!(!app.snapshot().await.is_authenticated());
}

#[tokio::test]
async fn test_logout_forgets_session_and_blogs() {
    let backend = start_backend().await;
    let store = MemoryStore::new();
    let app = open_app(&backend.base_url(), store.clone());
    app.login("aleksandar", "sifra").await;
    assert!(app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await);

    app.logout().await;

    let state = app.snapshot().await;
    assert!(!state.is_authenticated());
    assert!(state.visible_blogs().is_empty());
    assert!(SessionStore::new(store).load().is_none());
}

#[tokio::test]
async fn test_a_blog_can_be_created() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;

    app.toggle_form().await;
    assert!(app.snapshot().await.form_visible);
    assert!(app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await);

    let state = app.snapshot().await;
    assert_eq!(state.notification().map(|n| n.message.as_str()), Some("Blog added successfully"));
    assert!(state.blog_form.title.is_empty());
    let rows = state.visible_blogs();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].blog.title, "My New Blog");
    assert_eq!(rows[0].blog.likes, 0);
    // the server answers with a bare owner id, the name comes from the session
    assert_eq!(rows[0].blog.owner_name(), Some("Aleksandar Prodanic"));
    assert!(rows[0].deletable);
}

#[tokio::test]
async fn test_a_blog_without_title_is_rejected() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;

    assert!(app.add_blog("", "Nobody", "https://example.com").await);

    assert_eq!(
        message(&app).await.as_deref(),
        Some("Error adding blog: title and url are required")
    );
    assert!(titles(&app).await.is_empty());
}

#[tokio::test]
async fn test_a_blog_can_be_liked() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;
    app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await;
    let id = blog_id(&app, "My New Blog").await;

    assert!(app.like(&id).await);

    let state = app.snapshot().await;
    assert_eq!(state.notification().map(|n| n.message.as_str()), Some("Blog liked successfully"));
    let row = &state.visible_blogs()[0];
    assert_eq!(row.blog.likes, 1);
    assert_eq!(row.blog.owner_name(), Some("Aleksandar Prodanic"));

    // a fresh fetch agrees with the local copy
    app.load_blogs().await;
    assert_eq!(app.snapshot().await.visible_blogs()[0].blog.likes, 1);
}

#[tokio::test]
async fn test_owner_can_delete_after_confirming() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;
    app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await;
    let id = blog_id(&app, "My New Blog").await;

    assert!(!app.delete(&id, |_| false).await);
    assert_eq!(titles(&app).await, vec!["My New Blog"]);

    let mut prompt = None;
    let sent = app
        .delete(&id, |text| {
            prompt = Some(text.to_string());
            true
        })
        .await;
    assert!(sent);
    assert_eq!(prompt.as_deref(), Some("Remove blog My New Blog by Aleksandar Prodanic?"));
    assert!(titles(&app).await.is_empty());
    assert_eq!(
        message(&app).await.as_deref(),
        Some("Blog \"My New Blog\" deleted successfully")
    );

    // gone locally, so no second request is sent
    assert!(!app.delete(&id, |_| true).await);
    app.load_blogs().await;
    assert!(titles(&app).await.is_empty());
}

#[tokio::test]
async fn test_only_the_creator_sees_delete() {
    let backend = start_backend().await;
    let owner = open_app(&backend.base_url(), MemoryStore::new());
    owner.login("aleksandar", "sifra").await;
    owner.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await;
    let id = blog_id(&owner, "My New Blog").await;

    let other = open_app(&backend.base_url(), MemoryStore::new());
    other.login("jane", "password").await;

    let rows = other.snapshot().await.visible_blogs();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].blog.owner_name(), Some("Aleksandar Prodanic"));
    assert!(!rows[0].deletable);
    assert!(!other.delete(&id, |_| true).await);

    // the backend refuses too
    let jane: User = other.snapshot().await.user().cloned().unwrap();
    let blogs = BlogService::new(Backend::new(backend.base_url()));
    let err = blogs.delete(&Credential::for_user(&jane), &id).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(blogs.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_twice_is_not_found() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;
    app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await;
    let id = blog_id(&app, "My New Blog").await;
    let user = app.snapshot().await.user().cloned().unwrap();

    let blogs = BlogService::new(Backend::new(backend.base_url()));
    let credential = Credential::for_user(&user);
    blogs.delete(&credential, &id).await.unwrap();
    let err = blogs.delete(&credential, &id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_blogs_are_ordered_by_likes() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;

    for title in ["Blog One", "Blog Two", "Blog Three"] {
        assert!(app.add_blog(title, "Aleksandar Prodanic", "https://blogs.com").await);
    }
    for (title, likes) in [("Blog One", 2), ("Blog Two", 5), ("Blog Three", 3)] {
        let id = blog_id(&app, title).await;
        for _ in 0..likes {
            assert!(app.like(&id).await);
        }
    }

    assert_eq!(titles(&app).await, vec!["Blog Two", "Blog Three", "Blog One"]);

    // same order after a reload from the server
    app.load_blogs().await;
    assert_eq!(titles(&app).await, vec!["Blog Two", "Blog Three", "Blog One"]);
}

#[tokio::test]
async fn test_session_survives_restart() {
    let backend = start_backend().await;
    let store = MemoryStore::new();
    {
        let app = open_app(&backend.base_url(), store.clone());
        app.login("aleksandar", "sifra").await;
        app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await;
    }

    let reopened = open_app(&backend.base_url(), store);
    reopened.restore().await;

    let state = reopened.snapshot().await;
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("aleksandar"));
    assert_eq!(titles(&reopened).await, vec!["My New Blog"]);

    // the restored token is still accepted
    let id = blog_id(&reopened, "My New Blog").await;
    assert!(reopened.like(&id).await);
    assert_eq!(message(&reopened).await.as_deref(), Some("Blog liked successfully"));
}

#[tokio::test]
async fn test_stale_session_cannot_mutate() {
    let backend = start_backend().await;
    let store = MemoryStore::new();
    SessionStore::new(store.clone())
        .save(&User {
            id: "gone".into(),
            name: "Ghost".into(),
            username: "ghost".into(),
            token: "expired".into(),
        })
        .unwrap();

    let app = open_app(&backend.base_url(), store);
    app.restore().await;
    assert!(app.snapshot().await.is_authenticated());

    assert!(app.add_blog("Nope", "Ghost", "https://nope.com").await);
    assert_eq!(
        message(&app).await.as_deref(),
        Some("Error adding blog: token missing or invalid")
    );
    assert!(titles(&app).await.is_empty());
}

#[tokio::test]
async fn test_newer_notification_is_not_cleared_early() {
    let backend = start_backend().await;
    let app = open_app(&backend.base_url(), MemoryStore::new());
    app.login("aleksandar", "sifra").await;

    app.add_blog("My New Blog", "Aleksandar Prodanic", "https://mynewblog.com").await;
    let id = blog_id(&app, "My New Blog").await;
    tokio::time::sleep(NOTIFICATION / 2).await;
    app.like(&id).await;

    // past the first notification's deadline, before the second's
    tokio::time::sleep(NOTIFICATION * 5 / 8).await;
    assert_eq!(message(&app).await.as_deref(), Some("Blog liked successfully"));

    tokio::time::sleep(NOTIFICATION).await;
    assert_eq!(message(&app).await, None);
}

#[tokio::test]
async fn test_two_sessions_in_one_process() {
    let backend = start_backend().await;
    let aleksandar = open_app(&backend.base_url(), MemoryStore::new());
    let jane = open_app(&backend.base_url(), MemoryStore::new());
    aleksandar.login("aleksandar", "sifra").await;
    jane.login("jane", "password").await;

    assert!(aleksandar.add_blog("His Blog", "Aleksandar Prodanic", "https://his.com").await);
    assert!(jane.add_blog("Her Blog", "Jane Doe", "https://her.com").await);
    aleksandar.load_blogs().await;

    let rows = aleksandar.snapshot().await.visible_blogs();
    let deletable: Vec<(&str, bool)> = rows
        .iter()
        .map(|row| (row.blog.title.as_str(), row.deletable))
        .collect();
    assert_eq!(deletable, vec![("His Blog", true), ("Her Blog", false)]);

    let db = backend.db().lock().await;
    assert_eq!(db.populated_blogs().len(), 2);
}
