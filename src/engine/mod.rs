mod city_api;
mod command_api;
mod payment_api;
mod profile_api;
mod quote_api;
mod ride_api;

use sqlx::{Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    api::API,
    error::Error,
    fare::{DistanceProvider, FareSchedule, SimulatedDistance},
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    fare_schedule: FareSchedule,
    distance_provider: Box<dyn DistanceProvider + Send + Sync>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        Self::with_distance_provider(pool, Box::new(SimulatedDistance)).await
    }

    #[tracing::instrument(name = "Engine::with_distance_provider", skip_all)]
    pub async fn with_distance_provider(
        pool: Pool<Database>,
        distance_provider: Box<dyn DistanceProvider + Send + Sync>,
    ) -> Result<Self, Error> {
        // city directory
        pool.execute(
            "CREATE TABLE IF NOT EXISTS cities (id UUID PRIMARY KEY, name VARCHAR NOT NULL, state VARCHAR NOT NULL)",
        )
        .await?;

        // ride records; filter and order columns extracted from the document
        pool.execute(
            "CREATE TABLE IF NOT EXISTS rides (id UUID PRIMARY KEY, user_id UUID NOT NULL, status VARCHAR NOT NULL, scheduled_time TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        // verification profiles, maintained by the external review process
        pool.execute(
            "CREATE TABLE IF NOT EXISTS user_profiles (user_id UUID PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        // payment records
        pool.execute(
            "CREATE TABLE IF NOT EXISTS payments (id UUID PRIMARY KEY, ride_id UUID NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        let engine = Self {
            pool,
            fare_schedule: FareSchedule::standard(),
            distance_provider,
        };

        engine.seed_cities().await?;

        Ok(engine)
    }

    #[tracing::instrument(skip_all)]
    async fn seed_cities(&self) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let count: i64 = conn
            .fetch_one(sqlx::query("SELECT COUNT(*) AS count FROM cities"))
            .await?
            .try_get("count")?;

        if count > 0 {
            return Ok(());
        }

        let cities = [
            ("Noida", "Uttar Pradesh"),
            ("New Delhi", "Delhi"),
            ("Gurugram", "Haryana"),
            ("Mumbai", "Maharashtra"),
        ];

        for (name, state) in cities {
            conn.execute(
                sqlx::query("INSERT INTO cities (id, name, state) VALUES ($1, $2, $3)")
                    .bind(Uuid::new_v4())
                    .bind(name)
                    .bind(state),
            )
            .await?;
        }

        Ok(())
    }
}

impl API for Engine {}
