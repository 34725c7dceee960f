use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::auth::User;
use crate::entities::{Ride, RideDraft};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Deserialize)]
pub struct UpcomingParams {
    limit: Option<usize>,
}

pub async fn book(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(draft): Json<RideDraft>,
) -> Result<Json<Ride>, Error> {
    let ride = api.book_ride(user, draft).await?;

    Ok(ride.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    user: User,
) -> Result<Json<Vec<Ride>>, Error> {
    let rides = api.find_rides(user).await?;

    Ok(rides.into())
}

pub async fn upcoming(
    Extension(api): Extension<DynAPI>,
    user: User,
    Query(params): Query<UpcomingParams>,
) -> Result<Json<Vec<Ride>>, Error> {
    let rides = api.upcoming_rides(user, params.limit).await?;

    Ok(rides.into())
}
