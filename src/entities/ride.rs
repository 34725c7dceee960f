use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Location;
use crate::error::{validation_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    ECar,
    EBike,
    ERickshaw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Upi,
    Cash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl RideStatus {
    pub fn name(&self) -> String {
        match self {
            Self::Confirmed => "confirmed".into(),
            Self::Cancelled => "cancelled".into(),
            Self::Completed => "completed".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    Now,
    Later,
}

/// Booking form state as submitted by the rider. City and payment method are
/// optional here because the form starts blank; `Ride::new` enforces that
/// both are present before anything is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RideDraft {
    pub pickup: Location,
    pub dropoff: Location,
    pub scheduled_time: DateTime<Utc>,
    pub estimated_fare: i64,
    pub city_id: Option<Uuid>,
    pub booking_type: BookingType,
    pub vehicle_type: VehicleType,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pickup: Location,
    pub dropoff: Location,
    pub scheduled_time: DateTime<Utc>,
    pub estimated_fare: i64,
    pub city_id: Uuid,
    pub booking_type: BookingType,
    pub vehicle_type: VehicleType,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: RideStatus,
}

impl Ride {
    pub fn new(user_id: Uuid, draft: RideDraft) -> Result<Self, Error> {
        if draft.pickup.address.trim().is_empty() || draft.dropoff.address.trim().is_empty() {
            return Err(validation_error("please fill in all required fields"));
        }

        let city_id = draft
            .city_id
            .ok_or_else(|| validation_error("please select a city"))?;
        let payment_method = draft
            .payment_method
            .ok_or_else(|| validation_error("please select a payment method"))?;

        // cash is settled with the driver, everything else is charged upfront
        let payment_status = match payment_method {
            PaymentMethod::Cash => PaymentStatus::Pending,
            _ => PaymentStatus::Paid,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            pickup: draft.pickup,
            dropoff: draft.dropoff,
            scheduled_time: draft.scheduled_time,
            estimated_fare: draft.estimated_fare,
            city_id,
            booking_type: draft.booking_type,
            vehicle_type: draft.vehicle_type,
            payment_method,
            payment_status,
            status: RideStatus::Confirmed,
        })
    }
}

/// Rides still ahead of `now`, cancelled and completed ones dropped, ordered
/// soonest first. Ties keep their input order.
pub fn upcoming_rides(rides: Vec<Ride>, now: DateTime<Utc>, limit: Option<usize>) -> Vec<Ride> {
    let mut upcoming: Vec<Ride> = rides
        .into_iter()
        .filter(|ride| {
            ride.scheduled_time > now
                && !matches!(ride.status, RideStatus::Cancelled | RideStatus::Completed)
        })
        .collect();

    upcoming.sort_by_key(|ride| ride.scheduled_time);

    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }

    upcoming
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn draft() -> RideDraft {
        RideDraft {
            pickup: Location::new("noida".into()),
            dropoff: Location::new("mumbai".into()),
            scheduled_time: Utc::now(),
            estimated_fare: 120,
            city_id: Some(Uuid::new_v4()),
            booking_type: BookingType::Now,
            vehicle_type: VehicleType::ECar,
            payment_method: Some(PaymentMethod::Upi),
        }
    }

    fn ride_at(offset_hours: i64, status: RideStatus) -> Ride {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let mut ride = Ride::new(Uuid::new_v4(), draft()).unwrap();
        ride.scheduled_time = now + Duration::hours(offset_hours);
        ride.status = status;
        ride
    }

    #[test]
    fn booking_requires_city() {
        let mut missing_city = draft();
        missing_city.city_id = None;

        let err = Ride::new(Uuid::new_v4(), missing_city).unwrap_err();
        assert_eq!(err.message, "please select a city");
    }

    #[test]
    fn booking_requires_payment_method() {
        let mut missing_method = draft();
        missing_method.payment_method = None;

        let err = Ride::new(Uuid::new_v4(), missing_method).unwrap_err();
        assert_eq!(err.message, "please select a payment method");
    }

    #[test]
    fn booking_requires_both_addresses() {
        let mut blank_dropoff = draft();
        blank_dropoff.dropoff = Location::new("   ".into());

        assert!(Ride::new(Uuid::new_v4(), blank_dropoff).is_err());
    }

    #[test]
    fn cash_rides_stay_pending_until_the_driver_is_paid() {
        let mut cash = draft();
        cash.payment_method = Some(PaymentMethod::Cash);

        let ride = Ride::new(Uuid::new_v4(), cash).unwrap();
        assert_eq!(ride.payment_status, PaymentStatus::Pending);
        assert_eq!(ride.status, RideStatus::Confirmed);
    }

    #[test]
    fn prepaid_rides_are_marked_paid() {
        let ride = Ride::new(Uuid::new_v4(), draft()).unwrap();
        assert_eq!(ride.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn upcoming_drops_past_and_closed_rides_and_sorts_ascending() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let in_three = ride_at(3, RideStatus::Confirmed);
        let in_one = ride_at(1, RideStatus::Confirmed);
        let past = ride_at(-1, RideStatus::Confirmed);
        let cancelled = ride_at(2, RideStatus::Cancelled);
        let completed = ride_at(4, RideStatus::Completed);

        let result = upcoming_rides(
            vec![
                in_three.clone(),
                past,
                cancelled,
                in_one.clone(),
                completed,
            ],
            now,
            None,
        );

        let ids: Vec<Uuid> = result.iter().map(|ride| ride.id).collect();
        assert_eq!(ids, vec![in_one.id, in_three.id]);
    }

    #[test]
    fn upcoming_sort_is_stable_on_equal_times() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let first = ride_at(2, RideStatus::Confirmed);
        let second = ride_at(2, RideStatus::Confirmed);

        let result = upcoming_rides(vec![first.clone(), second.clone()], now, None);

        let ids: Vec<Uuid> = result.iter().map(|ride| ride.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn upcoming_truncates_to_limit() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let rides = vec![
            ride_at(1, RideStatus::Confirmed),
            ride_at(2, RideStatus::Confirmed),
            ride_at(3, RideStatus::Confirmed),
        ];

        let result = upcoming_rides(rides, now, Some(2));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn wire_names_match_the_rides_table() {
        assert_eq!(
            serde_json::to_value(VehicleType::ECar).unwrap(),
            serde_json::json!("e-car")
        );
        assert_eq!(
            serde_json::to_value(VehicleType::ERickshaw).unwrap(),
            serde_json::json!("e-rickshaw")
        );
        assert_eq!(
            serde_json::to_value(PaymentMethod::CreditCard).unwrap(),
            serde_json::json!("credit_card")
        );
        assert_eq!(
            serde_json::to_value(BookingType::Later).unwrap(),
            serde_json::json!("later")
        );
        assert_eq!(RideStatus::Cancelled.name(), "cancelled");
    }
}
