use std::sync::Arc;

use salvo::{listener::TcpListener, Server};

use beer_service::{
    app::{transform::beer::BeerMapper, use_case::BeerService},
    config::env_var,
    domain::datatype::beer_style::BeerStyle,
    infra::{
        database::{connection, repository::PgBeerRepository},
        router,
    },
};

#[tokio::main]
async fn main() {
    let env = env_var::get();
    tracing_subscriber::fmt().with_max_level(env.log_level).init();

    BeerStyle::verify_taxonomy().expect("Expect a consistent beer style label table");

    let pool = connection::create_sqlx_pool().await;
    connection::create_schema(&pool)
        .await
        .expect("Expect to apply the beer database schema");

    let service = Arc::new(BeerService::new(
        PgBeerRepository::new(pool),
        BeerMapper::default(),
    ));

    let address = format!("0.0.0.0:{}", env.port);
    tracing::info!("listening on {address}");
    let listener = TcpListener::bind(&address);
    Server::new(listener).serve(router::app(service)).await;
}
