use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};

use crate::{api::ProfileAPI, auth::User, entities::UserProfile, error::Error};

#[async_trait]
impl ProfileAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_profile(&self, user: User) -> Result<UserProfile, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM user_profiles WHERE user_id = $1").bind(&user.id),
            )
            .await?;

        // an account without a review record is still pending
        match maybe_result {
            Some(row) => {
                let Json(profile) = row.try_get("data")?;
                Ok(profile)
            }
            None => Ok(UserProfile::pending(user.id)),
        }
    }
}
