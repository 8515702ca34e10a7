pub mod connection {
    use std::time::Duration;

    use sqlx::PgPool;

    use crate::{config::env_var, error::persistence::PersistenceError};

    pub async fn create_sqlx_pool() -> PgPool {
        let dburl = env_var::get().database_url.clone();
        sqlx::postgres::PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .acquire_timeout(Duration::from_millis(1000))
            .idle_timeout(Duration::from_millis(1000 * 30))
            .max_lifetime(Duration::from_millis(1000 * 10))
            .connect(&dburl)
            .await
            .expect("Expect to create a database pool with a open connection")
    }

    /// Applies `dbschema.sql`. Every statement in it is idempotent.
    pub async fn create_schema(pool: &PgPool) -> Result<(), PersistenceError> {
        let mut trx = pool.begin().await?;
        for sttm in include_str!("../../dbschema.sql")
            .split(';')
            .filter(|sttm| !sttm.trim().is_empty())
        {
            sqlx::query(sttm).execute(&mut trx).await?;
        }
        trx.commit().await?;
        Ok(())
    }
}

pub mod repository {
    use async_trait::async_trait;
    use chrono::Utc;
    use sqlx::PgPool;
    use uuid::Uuid;

    use crate::{
        domain::{
            entity::{beer::Beer, Entity},
            repository::BeerRepository,
        },
        error::{persistence::PersistenceError, resource::ConflictError},
    };

    pub struct PgBeerRepository {
        pool: PgPool,
    }

    impl PgBeerRepository {
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }

        async fn insert(&self, beer: Beer) -> Result<Beer, PersistenceError> {
            let now = Utc::now().naive_utc();
            let (_, state) = beer.into_parts();

            let beer = sqlx::query_as::<_, Beer>(concat!(
                "INSERT INTO beer (id, version, beer_name, beer_style, upc, price, ",
                "quantity_on_hand, created_date, last_modified_date) ",
                "VALUES ($1, 0, $2, $3, $4, $5, $6, $7, $7) ",
                "RETURNING id, version, beer_name, beer_style, upc, price, ",
                "quantity_on_hand, created_date, last_modified_date",
            ))
            .bind(Uuid::new_v4())
            .bind(state.beer_name)
            .bind(state.beer_style)
            .bind(state.upc)
            .bind(state.price)
            .bind(state.quantity_on_hand)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

            Ok(beer)
        }

        async fn update(
            &self,
            id: Uuid,
            version: u32,
            beer: Beer,
        ) -> Result<Beer, PersistenceError> {
            let now = Utc::now().naive_utc();
            let (_, state) = beer.into_parts();

            let updated = sqlx::query_as::<_, Beer>(concat!(
                "UPDATE beer SET version = version + 1, beer_name = $3, beer_style = $4, ",
                "upc = $5, price = $6, quantity_on_hand = $7, last_modified_date = $8 ",
                "WHERE id = $1 AND version = $2 AND version < $9 ",
                "RETURNING id, version, beer_name, beer_style, upc, price, ",
                "quantity_on_hand, created_date, last_modified_date",
            ))
            .bind(id)
            .bind(version as i64)
            .bind(state.beer_name)
            .bind(state.beer_style)
            .bind(state.upc)
            .bind(state.price)
            .bind(state.quantity_on_hand)
            .bind(now)
            .bind(u32::MAX as i64)
            .fetch_optional(&self.pool)
            .await?;

            updated.ok_or_else(|| {
                tracing::warn!(%id, version, "stale beer version, update rejected");
                PersistenceError::VersionConflict(ConflictError::of::<Beer>(id, version))
            })
        }
    }

    #[async_trait]
    impl BeerRepository for PgBeerRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, PersistenceError> {
            let beer = sqlx::query_as::<_, Beer>(concat!(
                "SELECT id, version, beer_name, beer_style, upc, price, ",
                "quantity_on_hand, created_date, last_modified_date ",
                "FROM beer WHERE id = $1",
            ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

            Ok(beer)
        }

        async fn save(&self, beer: Beer) -> Result<Beer, PersistenceError> {
            match beer.ident() {
                None => self.insert(beer).await,
                Some(id) => {
                    let version = beer.version().unwrap_or_default();
                    self.update(id, version, beer).await
                }
            }
        }
    }
}

pub mod memory {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use crate::{
        domain::{
            entity::{beer::Beer, Entity, EntityData},
            repository::BeerRepository,
        },
        error::{persistence::PersistenceError, resource::ConflictError},
    };

    /// Process-local beer storage with the same versioning rules as the database.
    #[derive(Debug, Default)]
    pub struct InMemoryBeerRepository {
        beers: RwLock<HashMap<Uuid, Beer>>,
    }

    impl InMemoryBeerRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl BeerRepository for InMemoryBeerRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, PersistenceError> {
            Ok(self.beers.read().await.get(&id).cloned())
        }

        async fn save(&self, beer: Beer) -> Result<Beer, PersistenceError> {
            let now = Utc::now().naive_utc();
            let mut beers = self.beers.write().await;

            let data = match beer.ident() {
                None => EntityData::restore(Uuid::new_v4(), 0, now, now),
                Some(id) => {
                    let version = beer.version().unwrap_or_default();
                    let stored = beers
                        .get(&id)
                        .filter(|stored| stored.version() == Some(version))
                        .zip(version.checked_add(1));
                    match stored {
                        Some((stored, next_version)) => EntityData::new(
                            Some(id),
                            Some(next_version),
                            stored.created_date(),
                            Some(now),
                        ),
                        None => {
                            tracing::warn!(%id, version, "stale beer version, update rejected");
                            return Err(PersistenceError::VersionConflict(
                                ConflictError::of::<Beer>(id, version),
                            ));
                        }
                    }
                }
            };

            let (_, state) = beer.into_parts();
            let beer = Beer::restore(data, state);
            if let Some(id) = beer.ident() {
                beers.insert(id, beer.clone());
            }
            Ok(beer)
        }
    }

}
