use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::{Location, Quote, VehicleType};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    pickup: Location,
    dropoff: Location,
    vehicle_type: VehicleType,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api
        .create_quote(user, params.pickup, params.dropoff, params.vehicle_type)
        .await?;

    Ok(quote.into())
}
