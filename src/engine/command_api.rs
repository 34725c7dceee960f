use super::Engine;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    api::CommandAPI,
    auth::User,
    command::{self, ParsedCommand},
    error::Error,
};

#[async_trait]
impl CommandAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn parse_command(&self, _user: User, text: String) -> Result<ParsedCommand, Error> {
        command::parse_command(&text, Utc::now())
    }
}
