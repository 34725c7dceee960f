use super::Engine;

use async_trait::async_trait;

use crate::{
    api::QuoteAPI,
    auth::User,
    entities::{Location, Quote, VehicleType},
    error::Error,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        _user: User,
        pickup: Location,
        dropoff: Location,
        vehicle_type: VehicleType,
    ) -> Result<Quote, Error> {
        let distance_km = self.distance_provider.distance_km(&pickup, &dropoff);
        let fare = self.fare_schedule.estimate(vehicle_type, distance_km);

        Ok(Quote::new(vehicle_type, distance_km, fare))
    }
}
