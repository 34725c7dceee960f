use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PaymentAPI,
    auth::User,
    entities::PaymentMethod,
    error::{validation_error, Error},
    external::payments::{self, PaymentIntent},
};

#[async_trait]
impl PaymentAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_payment_intent(
        &self,
        user: User,
        amount: i64,
        payment_method: PaymentMethod,
    ) -> Result<PaymentIntent, Error> {
        if payment_method == PaymentMethod::Cash {
            return Err(validation_error("cash is collected by the driver"));
        }

        payments::create_payment_intent(amount, &payment_method, &user).await
    }
}
