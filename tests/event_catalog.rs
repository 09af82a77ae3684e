mod common;

use sqlx::SqlitePool;

use festreg::services::catalog_service;

use common::setup_pool;

async fn insert_event(
    pool: &SqlitePool,
    event_id: &str,
    name: &str,
    event_type: &str,
    target_gender: &str,
    is_active: i64,
) {
    sqlx::query(
        "INSERT INTO events (event_id, name, event_type, category, target_gender, is_active)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(event_id)
    .bind(name)
    .bind(event_type)
    .bind(name)
    .bind(target_gender)
    .bind(is_active)
    .execute(pool)
    .await
    .unwrap();
}

async fn seed_catalog(pool: &SqlitePool) {
    insert_event(pool, "e1", "Cricket", "sports", "male", 1).await;
    insert_event(pool, "e2", "Throwball", "sports", "female", 1).await;
    insert_event(pool, "e3", "Chess", "sports", "mixed", 1).await;
    insert_event(pool, "e4", "Dance", "culturals", "mixed", 1).await;
    insert_event(pool, "e5", "Wheelchair Race", "parasports", "mixed", 1).await;
    insert_event(pool, "e6", "Retired Event", "sports", "mixed", 0).await;
}

fn ids(rows: &[festreg::models::EventsRow]) -> Vec<&str> {
    let mut ids: Vec<&str> = rows.iter().map(|r| r.event_id.as_str()).collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn female_filter_sees_female_and_mixed() {
    let pool = setup_pool().await;
    seed_catalog(&pool).await;

    let rows = catalog_service::list_active(&pool, None, Some("female"))
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec!["e2", "e3", "e4", "e5"]);
}

#[tokio::test]
async fn male_filter_sees_male_and_mixed() {
    let pool = setup_pool().await;
    seed_catalog(&pool).await;

    let rows = catalog_service::list_active(&pool, None, Some("male"))
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec!["e1", "e3", "e4", "e5"]);
}

#[tokio::test]
async fn anything_else_sees_mixed_only() {
    let pool = setup_pool().await;
    seed_catalog(&pool).await;

    for gender in [None, Some("other"), Some("")] {
        let rows = catalog_service::list_active(&pool, None, gender).await.unwrap();
        assert_eq!(ids(&rows), vec!["e3", "e4", "e5"]);
    }
}

#[tokio::test]
async fn type_filter_narrows_and_inactive_stay_hidden() {
    let pool = setup_pool().await;
    seed_catalog(&pool).await;

    let rows = catalog_service::list_active(&pool, Some("sports"), Some("male"))
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec!["e1", "e3"]);

    let rows = catalog_service::list_active(&pool, Some("parasports"), None)
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec!["e5"]);
}
