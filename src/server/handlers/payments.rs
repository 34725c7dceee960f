use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::PaymentMethod;
use crate::error::Error;
use crate::external::payments::PaymentIntent;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateIntentParams {
    amount: i64,
    payment_method: PaymentMethod,
}

pub async fn create_intent(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(params): Json<CreateIntentParams>,
) -> Result<Json<PaymentIntent>, Error> {
    let intent = api
        .create_payment_intent(user, params.amount, params.payment_method)
        .await?;

    Ok(intent.into())
}
