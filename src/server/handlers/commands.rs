use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::command::ParsedCommand;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct ParseParams {
    text: String,
}

pub async fn parse(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(params): Json<ParseParams>,
) -> Result<Json<ParsedCommand>, Error> {
    let command = api.parse_command(user, params.text).await?;

    Ok(command.into())
}
