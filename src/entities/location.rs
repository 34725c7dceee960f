use serde::{Deserialize, Serialize};

/// A pickup or dropoff point. Manual text entry leaves the coordinates at the
/// zero sentinel; a device capture synthesizes the address from the fix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(address: String) -> Self {
        Self {
            address,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            address: format!("{:.6}, {:.6}", latitude, longitude),
            latitude,
            longitude,
        }
    }
}
