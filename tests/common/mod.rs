use catalog::configuration::{get_connection_pool, DatabaseSettings};
use catalog::models;
use sqlx::SqlitePool;
use std::net::TcpListener;
use tempfile::TempDir;

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    // the database file lives as long as the app
    _dir: TempDir,
}

impl TestApp {
    pub async fn add_product(&self, name: &str, quantity: i64, value: f64) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/product/add", &self.address))
            .json(&serde_json::json!({
                "nome": name,
                "quantidade": quantity,
                "valor": value,
            }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn add_comment(&self, product_id: i64, text: &str) -> models::Comment {
        let mut comment = models::Comment::new(text.to_string());
        comment.product_id = product_id;
        catalog::db::comment::insert(&self.db_pool, comment)
            .await
            .expect("Failed to insert comment.")
    }
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = DatabaseSettings {
        path: dir.path().join("catalog.db").to_string_lossy().into_owned(),
        max_connections: 5,
        acquire_timeout_secs: 5,
    };

    let db_pool = get_connection_pool(&settings);
    catalog::startup::migrate(&db_pool)
        .await
        .expect("Failed to migrate the database");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = catalog::startup::run(listener, db_pool.clone()).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool,
        _dir: dir,
    }
}
