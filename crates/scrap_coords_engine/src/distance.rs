//! Distanzrechner: euklidische Abstände eines Punkts zu allen Baken.

use glam::DVec2;

use crate::beacon::BEACON_COUNT;

/// Berechnet die Distanz von `point` zu jeder Bake, in Baken-Reihenfolge.
pub fn calculate_distances(point: DVec2, beacons: &[DVec2; BEACON_COUNT]) -> [f64; BEACON_COUNT] {
    beacons.map(|beacon| point.distance(beacon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BeaconLayout;
    use approx::assert_relative_eq;

    #[test]
    fn test_distances_from_origin() {
        let beacons = BeaconLayout::standard().positions();
        let distances = calculate_distances(DVec2::ZERO, &beacons);
        assert_eq!(distances, [0.0, 8192.0, 10240.0, 6144.0]);
    }

    #[test]
    fn test_distances_from_center_are_equal() {
        let beacons = BeaconLayout::standard().positions();
        let distances = calculate_distances(DVec2::new(4096.0, 3072.0), &beacons);
        for d in distances {
            assert_relative_eq!(d, 5120.0);
        }
    }

    #[test]
    fn test_distances_outside_map_are_still_defined() {
        let beacons = BeaconLayout::standard().positions();
        let distances = calculate_distances(DVec2::new(-3.0, -4.0), &beacons);
        assert_relative_eq!(distances[0], 5.0);
    }
}
