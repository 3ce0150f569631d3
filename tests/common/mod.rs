use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use storefront_core::db::{self, DbPool};

pub fn get_test_db_path(test_id: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    format!("./tests/output/{}-{}-{}/", test_id, std::process::id(), nanos)
}

pub fn setup_pool(app_data_dir: &str) -> Arc<DbPool> {
    let db_path = db::init(app_data_dir).expect("Failed to initialize database");

    let pool = db::create_pool(&db_path).expect("Failed to create database pool");

    db::run_migrations(&pool).expect("Failed to run migrations");

    pool
}

pub fn delete_db_dir(app_data_dir: &str) {
    let _ = std::fs::remove_dir_all(app_data_dir);
}
