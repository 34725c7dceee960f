use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::User;
use crate::command::ParsedCommand;
use crate::entities::{City, Location, PaymentMethod, Quote, Ride, RideDraft, UserProfile, VehicleType};
use crate::error::Error;
use crate::external::payments::PaymentIntent;

#[async_trait]
pub trait CommandAPI {
    async fn parse_command(&self, user: User, text: String) -> Result<ParsedCommand, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        user: User,
        pickup: Location,
        dropoff: Location,
        vehicle_type: VehicleType,
    ) -> Result<Quote, Error>;
}

#[async_trait]
pub trait CityAPI {
    async fn list_cities(&self, user: User) -> Result<Vec<City>, Error>;
}

#[async_trait]
pub trait RideAPI {
    async fn book_ride(&self, user: User, draft: RideDraft) -> Result<Ride, Error>;

    async fn find_rides(&self, user: User) -> Result<Vec<Ride>, Error>;

    async fn upcoming_rides(&self, user: User, limit: Option<usize>) -> Result<Vec<Ride>, Error>;
}

#[async_trait]
pub trait ProfileAPI {
    async fn find_profile(&self, user: User) -> Result<UserProfile, Error>;
}

#[async_trait]
pub trait PaymentAPI {
    async fn create_payment_intent(
        &self,
        user: User,
        amount: i64,
        payment_method: PaymentMethod,
    ) -> Result<PaymentIntent, Error>;
}

pub trait API: CommandAPI + QuoteAPI + CityAPI + RideAPI + ProfileAPI + PaymentAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
