use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;

use crate::{
    auth::User,
    entities::PaymentMethod,
    error::{invalid_input_error, upstream_error, Error},
};

/// Intent created on the hosted payment processor. The client secret is
/// handed to the rider's device to confirm the charge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub status: String,
}

#[tracing::instrument]
pub async fn create_payment_intent(
    amount: i64,
    payment_method: &PaymentMethod,
    user: &User,
) -> Result<PaymentIntent, Error> {
    let api_base = env::var("PAYMENT_API_BASE")?;
    let url = format!("https://{}/v1/payment_intents", api_base);
    let key = env::var("PAYMENT_API_KEY")?;

    let res = reqwest::Client::new()
        .post(url)
        .bearer_auth(key)
        .json(&json!({
            "amount": amount,
            "currency": "inr",
            "payment_method_types": [payment_method],
            "metadata": {
                "user_id": user.id,
            },
        }))
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}
