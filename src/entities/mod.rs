mod city;
mod location;
mod payment;
mod profile;
mod quote;
mod ride;

pub use city::City;
pub use location::Location;
pub use payment::Payment;
pub use profile::{UserProfile, VerificationStatus};
pub use quote::Quote;
pub use ride::{
    upcoming_rides, BookingType, PaymentMethod, PaymentStatus, Ride, RideDraft, RideStatus,
    VehicleType,
};
