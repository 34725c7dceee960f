use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use sqlx::{types::Json, Executor, Row};

use crate::{
    api::RideAPI,
    auth::User,
    entities::{upcoming_rides, Payment, PaymentMethod, Ride, RideDraft},
    error::Error,
    external::payments,
};

#[async_trait]
impl RideAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn book_ride(&self, user: User, draft: RideDraft) -> Result<Ride, Error> {
        let ride = Ride::new(user.id, draft)?;

        // charge non-cash bookings before anything is persisted; a failed
        // charge leaves no ride behind
        if ride.payment_method != PaymentMethod::Cash {
            // amount in minor currency units
            payments::create_payment_intent(ride.estimated_fare * 100, &ride.payment_method, &user)
                .await?;
        }

        let payment = Payment::new(
            ride.id,
            ride.estimated_fare,
            ride.payment_method,
            ride.payment_status,
        );

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO rides (id, user_id, status, scheduled_time, data) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&ride.id)
            .bind(&ride.user_id)
            .bind(ride.status.name())
            .bind(&ride.scheduled_time)
            .bind(Json(&ride)),
        )
        .await?;

        conn.execute(
            sqlx::query("INSERT INTO payments (id, ride_id, data) VALUES ($1, $2, $3)")
                .bind(&payment.id)
                .bind(&payment.ride_id)
                .bind(Json(&payment)),
        )
        .await?;

        Ok(ride)
    }

    #[tracing::instrument(skip(self))]
    async fn find_rides(&self, user: User) -> Result<Vec<Ride>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(
            sqlx::query("SELECT data FROM rides WHERE user_id = $1 ORDER BY scheduled_time DESC")
                .bind(&user.id),
        );

        let mut rides = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let Json(ride) = row.try_get("data")?;
            rides.push(ride);
        }

        Ok(rides)
    }

    #[tracing::instrument(skip(self))]
    async fn upcoming_rides(&self, user: User, limit: Option<usize>) -> Result<Vec<Ride>, Error> {
        let rides = self.find_rides(user).await?;

        Ok(upcoming_rides(rides, Utc::now(), limit))
    }
}
