//! Integration tests for customer account management.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_customer, send_json, test_app};

async fn create_account(app: &axum::Router, customer_id: i64, username: &str) -> Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/customer_accounts",
        Some(json!({
            "username": username,
            "password": "panda1234",
            "customer_id": customer_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_returns_account_with_nested_customer() {
    let (app, _pool) = test_app().await;
    let customer_id = create_customer(&app, "owner").await;

    let body = create_account(&app, customer_id, "owner_login").await;
    assert_eq!(body["username"], "owner_login");
    assert_eq!(body["customer"]["id"], customer_id);
    assert_eq!(body["customer"]["name"], "owner");
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_missing_fields_returns_400() {
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/customer_accounts",
        Some(json!({ "username": "lonely" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: 'username', 'password', 'customer_id'"
    );
}

#[tokio::test]
async fn test_create_for_unknown_customer_returns_404() {
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/customer_accounts",
        Some(json!({
            "username": "orphan",
            "password": "panda1234",
            "customer_id": 9999,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Customer with provided ID does not exist");
}

#[tokio::test]
async fn test_duplicate_username_returns_409_and_leaves_db_unchanged() {
    let (app, pool) = test_app().await;
    let first = create_customer(&app, "first").await;
    let second = create_customer(&app, "second").await;

    create_account(&app, first, "taken").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/customer_accounts",
        Some(json!({
            "username": "taken",
            "password": "different",
            "customer_id": second,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");

    let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer_accounts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(accounts, 1);
}

#[tokio::test]
async fn test_password_is_hashed_and_never_returned() {
    let (app, pool) = test_app().await;
    let customer_id = create_customer(&app, "secretive").await;

    let body = create_account(&app, customer_id, "secretive_login").await;
    let account_id = body["id"].as_i64().unwrap();

    // No response surface carries the password, in any form
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("panda1234"));

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/customer_accounts/{account_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("panda1234"));

    // The stored column holds an Argon2 hash, not the plaintext
    let stored: String =
        sqlx::query_scalar("SELECT password FROM customer_accounts WHERE id = ?")
            .bind(account_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_ne!(stored, "panda1234");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn test_partial_update_username_only() {
    let (app, pool) = test_app().await;
    let customer_id = create_customer(&app, "renamer").await;
    let body = create_account(&app, customer_id, "old_login").await;
    let account_id = body["id"].as_i64().unwrap();

    let before: String = sqlx::query_scalar("SELECT password FROM customer_accounts WHERE id = ?")
        .bind(account_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/customer_accounts/{account_id}"),
        Some(json!({ "username": "new_login" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "new_login");

    // Password column untouched
    let after: String = sqlx::query_scalar("SELECT password FROM customer_accounts WHERE id = ?")
        .bind(account_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_partial_update_password_rehashes() {
    let (app, pool) = test_app().await;
    let customer_id = create_customer(&app, "rotator").await;
    let body = create_account(&app, customer_id, "rotator_login").await;
    let account_id = body["id"].as_i64().unwrap();

    let before: String = sqlx::query_scalar("SELECT password FROM customer_accounts WHERE id = ?")
        .bind(account_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/customer_accounts/{account_id}"),
        Some(json!({ "password": "rotated-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "rotator_login");

    let after: String = sqlx::query_scalar("SELECT password FROM customer_accounts WHERE id = ?")
        .bind(account_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(before, after);
    assert_ne!(after, "rotated-secret");
    assert!(after.starts_with("$argon2"));
}

#[tokio::test]
async fn test_update_to_taken_username_returns_409() {
    let (app, _pool) = test_app().await;
    let customer_id = create_customer(&app, "pair").await;
    create_account(&app, customer_id, "first_login").await;
    let body = create_account(&app, customer_id, "second_login").await;
    let account_id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/customer_accounts/{account_id}"),
        Some(json!({ "username": "first_login" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");

    // Keeping one's own username is not a conflict
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/customer_accounts/{account_id}"),
        Some(json!({ "username": "second_login" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let (app, _pool) = test_app().await;
    let customer_id = create_customer(&app, "leaver").await;
    let body = create_account(&app, customer_id, "leaver_login").await;
    let account_id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/customer_accounts/{account_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Customer account with ID {account_id} deleted successfully!")
    );

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/customer_accounts/{account_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
