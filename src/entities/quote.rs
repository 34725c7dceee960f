use serde::{Deserialize, Serialize};

use crate::entities::VehicleType;

/// A display fare. Ephemeral: quotes are recomputed whenever pickup, dropoff
/// or vehicle change and are never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub vehicle_type: VehicleType,
    pub distance_km: f64,
    pub fare: i64,
}

impl Quote {
    pub fn new(vehicle_type: VehicleType, distance_km: f64, fare: i64) -> Self {
        Self {
            vehicle_type,
            distance_km,
            fare,
        }
    }
}
