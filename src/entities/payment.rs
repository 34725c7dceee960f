use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PaymentMethod, PaymentStatus};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub amount: i64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn new(
        ride_id: Uuid,
        amount: i64,
        payment_method: PaymentMethod,
        status: PaymentStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ride_id,
            amount,
            payment_method,
            status,
        }
    }
}
