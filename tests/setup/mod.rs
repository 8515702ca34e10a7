use std::time::Duration;

use sqlx::PgPool;

fn database_url() -> String {
    dotenv::dotenv().ok();

    let database_host = std::env::var("DATABASE_HOST").unwrap();
    let database_name = std::env::var("DATABASE_NAME").unwrap();
    let database_user = std::env::var("DATABASE_USER").unwrap();
    let database_password = std::env::var("DATABASE_PASSWORD").unwrap();
    let database_port: u16 = std::env::var("DATABASE_PORT")
        .unwrap()
        .parse()
        .expect("Invalid DATABASE_PORT");

    format!("postgres://{database_user}:{database_password}@{database_host}:{database_port}/{database_name}")
}

/// Connects to the test database and recreates the beer table.
pub async fn setup_database() -> PgPool {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .acquire_timeout(Duration::from_millis(1000))
        .idle_timeout(Duration::from_millis(1000 * 30))
        .max_lifetime(Duration::from_millis(1000 * 10))
        .connect(&database_url())
        .await
        .expect("Expect to create a database pool with a open connection");

    let drop_sttm = sqlx::query("DROP TABLE IF EXISTS beer CASCADE");

    let mut trx = pool.begin().await.unwrap();
    drop_sttm.execute(&mut trx).await.unwrap();
    for sttm in include_str!("../../dbschema.sql")
        .split(';')
        .filter(|sttm| !sttm.trim().is_empty())
    {
        sqlx::query(sttm).execute(&mut trx).await.unwrap();
    }
    trx.commit().await.unwrap();

    pool
}
