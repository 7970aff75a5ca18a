//! End-to-end tests over a real SQLite store: account creation, email
//! token issuance, and the password-reset notification flow.

use std::sync::Arc;

use slipway_config::{AppConfig, DatabaseConfig};
use slipway_users::db::{ensure_schema, prepare_database};
use slipway_users::{
    CreateUserRequest, NotificationKind, Presentable, RandomTokenGenerator, RecordingDispatcher,
    SqliteUserRepository, UserError, UserService, EMAIL_TOKEN_LENGTH,
};
use tempfile::TempDir;

fn install_test_config() {
    let mut config = AppConfig::default();
    config.app.url = "https://app.test".to_string();
    slipway_config::install(config);
}

type TestService = UserService<SqliteUserRepository, RecordingDispatcher>;

async fn create_test_service() -> (TestService, RecordingDispatcher, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("slipway_users.db");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", db_path.display()),
        max_connections: 1,
    };

    let pool = prepare_database(&config).await.expect("database prepares");
    ensure_schema(&pool).await.expect("schema applies");

    let dispatcher = RecordingDispatcher::new();
    let service = UserService::new(
        SqliteUserRepository::new(pool),
        Arc::new(RandomTokenGenerator::new()),
        dispatcher.clone(),
    );

    (service, dispatcher, temp_dir)
}

fn admin_request() -> CreateUserRequest {
    CreateUserRequest {
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        password: Some("correct horse battery staple".to_string()),
        avatar: Some("/an/image.jpg".to_string()),
    }
}

#[tokio::test]
async fn email_token_is_generated_and_persisted() {
    let (service, _dispatcher, _temp_dir) = create_test_service().await;

    let user = service.create_user(admin_request()).await.unwrap();
    assert!(user.email_token.is_none());

    let token = service.request_email_token(user.id).await.unwrap();
    assert_eq!(token.len(), EMAIL_TOKEN_LENGTH);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    let reloaded = service.get_user(user.id).await.unwrap();
    assert_eq!(reloaded.email_token.as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn password_reset_flow_records_one_notification() {
    let (service, dispatcher, _temp_dir) = create_test_service().await;

    let user = service.create_user(admin_request()).await.unwrap();
    let token = service.request_email_token(user.id).await.unwrap();

    service.send_password_reset(&user, &token).await.unwrap();

    let sent = dispatcher.sent_to(&user).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::PasswordReset);
    assert_eq!(sent[0].token.as_deref(), Some(token.as_str()));

    // No notifications leaked to anyone else.
    assert_eq!(dispatcher.sent().await.len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (service, _dispatcher, _temp_dir) = create_test_service().await;

    service.create_user(admin_request()).await.unwrap();
    let result = service.create_user(admin_request()).await;

    assert!(matches!(result, Err(UserError::EmailAlreadyExists)));
}

#[tokio::test]
async fn derived_attributes_survive_a_round_trip() {
    install_test_config();
    let (service, _dispatcher, _temp_dir) = create_test_service().await;

    let user = service.create_user(admin_request()).await.unwrap();
    assert!(!user.has_two_factor_authentication());

    service
        .set_two_factor_secret(user.id, Some("a-2fa-secret".to_string()))
        .await
        .unwrap();

    let reloaded = service.get_user(user.id).await.unwrap();
    assert!(reloaded.has_two_factor_authentication());
    assert_eq!(
        reloaded.avatar_url(),
        Some("https://app.test/an/image.jpg".to_string())
    );
}

#[tokio::test]
async fn presenter_binds_to_the_loaded_user() {
    let (service, _dispatcher, _temp_dir) = create_test_service().await;

    let created = service.create_user(admin_request()).await.unwrap();
    let loaded = service.get_user(created.id).await.unwrap();

    let presenter = loaded.presenter();
    assert!(std::ptr::eq(presenter.object(), &loaded));
    assert_eq!(presenter.name(), "Admin");
}

#[tokio::test]
async fn password_verification_works_against_the_stored_hash() {
    let (service, _dispatcher, _temp_dir) = create_test_service().await;

    let user = service.create_user(admin_request()).await.unwrap();
    let loaded = service.get_user(user.id).await.unwrap();

    assert!(service
        .verify_password(&loaded, "correct horse battery staple")
        .await
        .unwrap());
    assert!(!service.verify_password(&loaded, "wrong").await.unwrap());
}
