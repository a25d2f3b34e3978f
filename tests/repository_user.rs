mod common;

use serde_json::{Map, json};
use sqlx::PgPool;
use std::sync::Arc;
use user_service::domain::entities::NewUser;
use user_service::domain::repositories::UserRepository;
use user_service::infrastructure::persistence::{PgGateway, PgUserRepository};

fn make_repository(pool: PgPool) -> PgUserRepository {
    PgUserRepository::new(PgGateway::new(Arc::new(pool)))
}

#[sqlx::test]
async fn test_create_assigns_identifier(pool: PgPool) {
    let repo = make_repository(pool);

    let mut attributes = Map::new();
    attributes.insert("email".to_string(), json!("alice@example.com"));

    let user = repo
        .create(NewUser {
            name: "Alice".to_string(),
            attributes,
        })
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.attributes["email"], json!("alice@example.com"));
}

#[sqlx::test]
async fn test_find_by_id_round_trip(pool: PgPool) {
    let repo = make_repository(pool);

    let mut attributes = Map::new();
    attributes.insert("age".to_string(), json!(30));

    let created = repo
        .create(NewUser {
            name: "Alice".to_string(),
            attributes,
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
async fn test_find_by_id_absent_is_none(pool: PgPool) {
    let repo = make_repository(pool);

    let found = repo.find_by_id(404).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_insertion_order(pool: PgPool) {
    common::create_test_user(&pool, "Alice").await;
    common::create_test_user(&pool, "Bob").await;
    common::create_test_user(&pool, "Carol").await;

    let repo = make_repository(pool);

    let users = repo.list().await.unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert!(users.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
async fn test_delete_reports_rows_affected(pool: PgPool) {
    let id = common::create_test_user(&pool, "Alice").await;

    let repo = make_repository(pool);

    assert!(repo.delete(id).await.unwrap());

    // The row is gone; a second delete touches nothing.
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}
