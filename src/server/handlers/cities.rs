use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::City;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(
    Extension(api): Extension<DynAPI>,
    user: User,
) -> Result<Json<Vec<City>>, Error> {
    let cities = api.list_cities(user).await?;

    Ok(cities.into())
}
