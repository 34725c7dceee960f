use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{Executor, Row};

use crate::{api::CityAPI, auth::User, entities::City, error::Error};

#[async_trait]
impl CityAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_cities(&self, _user: User) -> Result<Vec<City>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(sqlx::query("SELECT id, name, state FROM cities ORDER BY name ASC"));

        let mut cities = Vec::new();

        while let Some(row) = rows.try_next().await? {
            cities.push(City {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                state: row.try_get("state")?,
            });
        }

        Ok(cities)
    }
}
