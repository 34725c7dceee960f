use std::collections::HashMap;

use rand::Rng;

use crate::entities::{Location, VehicleType};

/// Seam for the distance used in fare estimation, so a real geodesic or
/// routing backend can replace the simulation without touching the formula.
pub trait DistanceProvider {
    /// Kilometres between the two points.
    fn distance_km(&self, origin: &Location, destination: &Location) -> f64;
}

/// Placeholder provider: a uniform draw from [0, 10). Ignores the
/// coordinates entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedDistance;

impl DistanceProvider for SimulatedDistance {
    fn distance_km(&self, _origin: &Location, _destination: &Location) -> f64 {
        rand::thread_rng().gen_range(0.0..10.0)
    }
}

/// Per-kilometre base rates by vehicle category plus a flat booking fee.
/// `fare = round(base_rate * distance + flat_fee)`.
#[derive(Clone, Debug)]
pub struct FareSchedule {
    flat_fee: f64,
    default_rate: f64,
    rates: HashMap<VehicleType, f64>,
}

impl FareSchedule {
    pub fn new(flat_fee: f64, default_rate: f64, rates: HashMap<VehicleType, f64>) -> Self {
        Self {
            flat_fee,
            default_rate,
            rates,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            50.0,
            10.0,
            HashMap::from([
                (VehicleType::ECar, 15.0),
                (VehicleType::EBike, 10.0),
                (VehicleType::ERickshaw, 8.0),
            ]),
        )
    }

    /// The launch-era pricing: one per-km rate for every vehicle.
    pub fn flat() -> Self {
        Self::new(50.0, 12.0, HashMap::new())
    }

    pub fn base_rate(&self, vehicle_type: VehicleType) -> f64 {
        self.rates
            .get(&vehicle_type)
            .copied()
            .unwrap_or(self.default_rate)
    }

    pub fn estimate(&self, vehicle_type: VehicleType, distance_km: f64) -> i64 {
        (self.base_rate(vehicle_type) * distance_km + self.flat_fee).round() as i64
    }
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{DistanceProvider, FareSchedule, SimulatedDistance};
    use crate::entities::{Location, VehicleType};

    struct FixedDistance(f64);

    impl DistanceProvider for FixedDistance {
        fn distance_km(&self, _origin: &Location, _destination: &Location) -> f64 {
            self.0
        }
    }

    #[test]
    fn a_substituted_provider_makes_the_estimate_deterministic() {
        let schedule = FareSchedule::standard();
        let provider = FixedDistance(6.0);
        let origin = Location::new("sector 18, noida".into());
        let destination = Location::new("connaught place, delhi".into());

        let distance = provider.distance_km(&origin, &destination);
        assert_eq!(schedule.estimate(VehicleType::ECar, distance), 140);
    }

    #[test]
    fn fare_is_base_rate_times_distance_plus_flat_fee() {
        let schedule = FareSchedule::standard();

        assert_eq!(schedule.estimate(VehicleType::ECar, 2.0), 80);
        assert_eq!(schedule.estimate(VehicleType::EBike, 3.5), 85);
        assert_eq!(schedule.estimate(VehicleType::ERickshaw, 0.0), 50);
    }

    #[test]
    fn fare_is_rounded_to_a_whole_amount() {
        let schedule = FareSchedule::standard();

        // 15 * 1.23 + 50 = 68.45
        assert_eq!(schedule.estimate(VehicleType::ECar, 1.23), 68);
        // 15 * 1.27 + 50 = 69.05
        assert_eq!(schedule.estimate(VehicleType::ECar, 1.27), 69);
    }

    #[test]
    fn unlisted_vehicle_types_fall_back_to_the_default_rate() {
        let schedule = FareSchedule::new(
            50.0,
            10.0,
            HashMap::from([(VehicleType::ECar, 15.0)]),
        );

        assert_eq!(schedule.base_rate(VehicleType::ERickshaw), 10.0);
        assert_eq!(schedule.estimate(VehicleType::ERickshaw, 4.0), 90);
    }

    #[test]
    fn flat_schedule_charges_twelve_per_km_for_everything() {
        let schedule = FareSchedule::flat();

        assert_eq!(schedule.base_rate(VehicleType::ECar), 12.0);
        assert_eq!(schedule.base_rate(VehicleType::EBike), 12.0);
        assert_eq!(schedule.estimate(VehicleType::ECar, 5.0), 110);
    }

    #[test]
    fn simulated_distance_stays_within_ten_km() {
        let provider = SimulatedDistance;
        let origin = Location::new("a".into());
        let destination = Location::new("b".into());

        for _ in 0..1000 {
            let distance = provider.distance_km(&origin, &destination);
            assert!((0.0..10.0).contains(&distance));
        }
    }

    #[test]
    fn simulated_fares_stay_between_flat_fee_and_ceiling() {
        let schedule = FareSchedule::standard();
        let provider = SimulatedDistance;
        let origin = Location::new("a".into());
        let destination = Location::new("b".into());

        for _ in 0..1000 {
            let fare = schedule.estimate(
                VehicleType::ECar,
                provider.distance_km(&origin, &destination),
            );
            assert!(fare >= 50);
            assert!(fare <= 15 * 10 + 50);
        }
    }
}
