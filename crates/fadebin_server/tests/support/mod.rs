//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use fadebin_server::{create_app, AppState, Config, Database};
use std::path::Path;
use tempfile::TempDir;

pub(crate) fn test_config_for_db_path(db_path: &Path) -> Config {
    Config {
        db_path: db_path.to_str().expect("db path").to_string(),
        port: 0,
        max_paste_size: 10_000_000,
    }
}

pub(crate) fn setup_test_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("test-db");
    let config = test_config_for_db_path(&db_path);
    let db = Database::new(config.db_path.as_str()).expect("open db");
    let state = AppState::new(config, db);
    let app = create_app(state, false);
    let server = TestServer::new(app).expect("server");
    (server, temp_dir)
}
