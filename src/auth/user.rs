use async_trait::async_trait;
use axum::extract::{FromRequest, RequestParts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{auth_required_error, Error};

/// Session identity. The identity provider in front of this service
/// authenticates the rider and forwards their id in the `x-user-id` header;
/// every API operation takes the resulting `User` explicitly rather than
/// reading ambient session state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[async_trait]
impl<B: Send> FromRequest<B> for User {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let id = req
            .headers()
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or_else(auth_required_error)?;

        Ok(User::new(id))
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::{FromRequest, RequestParts};
    use axum::http::Request;
    use tokio_test::block_on;
    use uuid::Uuid;

    use super::User;

    fn request(header: Option<&str>) -> RequestParts<()> {
        let mut builder = Request::builder().uri("/rides");
        if let Some(value) = header {
            builder = builder.header("x-user-id", value);
        }
        RequestParts::new(builder.body(()).unwrap())
    }

    #[test]
    fn header_id_becomes_the_session_user() {
        let id = Uuid::new_v4();
        let mut parts = request(Some(&id.to_string()));

        let user = block_on(User::from_request(&mut parts)).unwrap();
        assert_eq!(user.id, id);
    }

    #[test]
    fn missing_header_is_an_auth_failure() {
        let mut parts = request(None);

        let err = block_on(User::from_request(&mut parts)).unwrap_err();
        assert_eq!(err.code, 103);
    }

    #[test]
    fn malformed_header_is_an_auth_failure() {
        let mut parts = request(Some("not-a-uuid"));

        let err = block_on(User::from_request(&mut parts)).unwrap_err();
        assert_eq!(err.code, 103);
    }
}
