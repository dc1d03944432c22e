//! Zielfunktion der Trilateration: Summe der quadrierten Distanz-Residuen.

use glam::DVec2;

use crate::beacon::BEACON_COUNT;

/// `f(P) = Σ_i (‖P − b_i‖ − d_i)²` mit analytischem Gradienten.
#[derive(Debug, Clone, Copy)]
pub struct ResidualObjective<'a> {
    beacons: &'a [DVec2; BEACON_COUNT],
    distances: &'a [f64; BEACON_COUNT],
}

impl<'a> ResidualObjective<'a> {
    /// Bindet Baken-Positionen und gemessene Distanzen.
    pub fn new(beacons: &'a [DVec2; BEACON_COUNT], distances: &'a [f64; BEACON_COUNT]) -> Self {
        Self { beacons, distances }
    }

    /// Residuen `‖P − b_i‖ − d_i` pro Bake.
    pub fn residuals(&self, point: DVec2) -> [f64; BEACON_COUNT] {
        std::array::from_fn(|i| point.distance(self.beacons[i]) - self.distances[i])
    }

    /// Zielfunktionswert an `point`.
    pub fn value(&self, point: DVec2) -> f64 {
        self.residuals(point).iter().map(|r| r * r).sum()
    }

    /// Zielfunktionswert und Gradient in einem Durchlauf.
    ///
    /// Liegt `point` exakt auf einer Bake, trägt diese Bake keinen Gradienten bei.
    pub fn value_and_gradient(&self, point: DVec2) -> (f64, DVec2) {
        let mut value = 0.0;
        let mut gradient = DVec2::ZERO;

        for (beacon, measured) in self.beacons.iter().zip(self.distances) {
            let offset = point - *beacon;
            let range = offset.length();
            let residual = range - measured;
            value += residual * residual;
            if range > f64::EPSILON {
                gradient += offset * (2.0 * residual / range);
            }
        }

        (value, gradient)
    }
}
