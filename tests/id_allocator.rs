mod common;

use std::collections::HashSet;

use festreg::database::counter_repo;

use common::setup_pool;

#[tokio::test]
async fn concurrent_callers_get_distinct_increasing_values() {
    let pool = setup_pool().await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            counter_repo::next_seq(&pool, "userId").await
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        let seq = handle.await.unwrap().unwrap();
        assert!(seen.insert(seq), "duplicate sequence value {}", seq);
    }
    assert_eq!(seen.len(), 20);
    assert_eq!(*seen.iter().min().unwrap(), 1);
    assert_eq!(*seen.iter().max().unwrap(), 20);
}

#[tokio::test]
async fn namespaces_are_independent() {
    let pool = setup_pool().await;

    assert_eq!(counter_repo::next_seq(&pool, "userId").await.unwrap(), 1);
    assert_eq!(counter_repo::next_seq(&pool, "userId").await.unwrap(), 2);
    assert_eq!(counter_repo::next_seq(&pool, "mcaId").await.unwrap(), 1);
}

#[tokio::test]
async fn reset_restarts_the_namespace_at_one() {
    let pool = setup_pool().await;

    for _ in 0..5 {
        counter_repo::next_seq(&pool, "userId").await.unwrap();
    }
    let removed = counter_repo::reset(&pool, "userId").await.unwrap();
    assert_eq!(removed, 1);

    assert_eq!(counter_repo::next_seq(&pool, "userId").await.unwrap(), 1);

    // Resetting a namespace that never issued anything is harmless.
    assert_eq!(counter_repo::reset(&pool, "ghost").await.unwrap(), 0);
}
