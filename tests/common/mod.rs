#![allow(dead_code)]

use octofit_tracker::config::EnvConfig;
use octofit_tracker::db::database_service::{DatabaseService, TableCounts};

pub struct TestContext {
    pub db: DatabaseService,
}

impl TestContext {
    /// Fresh in-memory SQLite database with the schema applied.
    pub async fn new() -> TestContext {
        let db = DatabaseService::new(&get_test_config("sqlite::memory:"))
            .await
            .expect("Failed to initialize DatabaseService");

        TestContext { db }
    }
}

pub fn get_test_config(db_url: &str) -> EnvConfig {
    EnvConfig {
        db_url: db_url.to_string(),
        log_sql: false,
    }
}

pub fn fixture_counts() -> TableCounts {
    TableCounts {
        users: 5,
        teams: 2,
        memberships: 5,
        activities: 5,
        leaderboard_entries: 2,
        workouts: 5,
    }
}
