use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::UserProfile;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(
    Extension(api): Extension<DynAPI>,
    user: User,
) -> Result<Json<UserProfile>, Error> {
    let profile = api.find_profile(user).await?;

    Ok(profile.into())
}
