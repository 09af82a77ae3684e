use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use festreg::database::counter_repo;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let namespace = match env::args().nth(1) {
        Some(ns) => ns,
        None => {
            eprintln!("usage: reset_counters <namespace>   (e.g. userId, mcaId)");
            std::process::exit(2);
        }
    };

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("cannot connect to DB");

    match counter_repo::reset(&pool, &namespace).await {
        Ok(removed) => {
            println!(
                "counter reset: namespace={}, removed={}",
                namespace, removed
            );
            println!(
                "next issued ID restarts at 1 and can collide with IDs already referenced elsewhere"
            );
        }
        Err(e) => {
            eprintln!("counter reset failed: {}", e);
            std::process::exit(1);
        }
    }
}
