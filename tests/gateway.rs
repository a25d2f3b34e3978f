use serde_json::{Map, json};
use sqlx::PgPool;
use std::sync::Arc;
use user_service::domain::entities::{NewUser, User};
use user_service::infrastructure::persistence::PgGateway;

fn make_gateway(pool: PgPool) -> PgGateway {
    PgGateway::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_save_then_find_by_id(pool: PgPool) {
    let gateway = make_gateway(pool);

    let mut attributes = Map::new();
    attributes.insert("email".to_string(), json!("alice@example.com"));

    let mut uow = gateway.begin().await.unwrap();
    let saved: User = gateway
        .save(
            &mut uow,
            NewUser {
                name: "Alice".to_string(),
                attributes,
            },
        )
        .await
        .unwrap();
    uow.commit().await.unwrap();

    let mut uow = gateway.begin().await.unwrap();
    let found: Option<User> = gateway.find_by_id(&mut uow, saved.id).await.unwrap();
    uow.commit().await.unwrap();

    assert_eq!(found, Some(saved));
}

#[sqlx::test]
async fn test_find_by_id_absent_is_none(pool: PgPool) {
    let gateway = make_gateway(pool);

    let mut uow = gateway.begin().await.unwrap();
    let found: Option<User> = gateway.find_by_id(&mut uow, 404).await.unwrap();
    uow.commit().await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_execute_statement_applies_side_effects(pool: PgPool) {
    let gateway = make_gateway(pool);

    let mut uow = gateway.begin().await.unwrap();
    let saved: User = gateway
        .save(
            &mut uow,
            NewUser {
                name: "Alice".to_string(),
                attributes: Map::new(),
            },
        )
        .await
        .unwrap();
    uow.commit().await.unwrap();

    let mut uow = gateway.begin().await.unwrap();
    gateway
        .execute_statement(&mut uow, "UPDATE users SET name = 'Renamed'")
        .await
        .unwrap();
    uow.commit().await.unwrap();

    let mut uow = gateway.begin().await.unwrap();
    let found: Option<User> = gateway.find_by_id(&mut uow, saved.id).await.unwrap();
    uow.commit().await.unwrap();

    assert_eq!(found.unwrap().name, "Renamed");
}

#[sqlx::test]
async fn test_uncommitted_unit_of_work_rolls_back(pool: PgPool) {
    let gateway = make_gateway(pool);

    let mut uow = gateway.begin().await.unwrap();
    let saved: User = gateway
        .save(
            &mut uow,
            NewUser {
                name: "Alice".to_string(),
                attributes: Map::new(),
            },
        )
        .await
        .unwrap();

    // Dropping the unit of work without committing rolls back the insert.
    drop(uow);

    let mut uow = gateway.begin().await.unwrap();
    let found: Option<User> = gateway.find_by_id(&mut uow, saved.id).await.unwrap();
    uow.commit().await.unwrap();

    assert!(found.is_none());
}
