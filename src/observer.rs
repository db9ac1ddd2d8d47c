use log::debug;

use crate::point::Point;
use crate::trip::TripComparison;

/// Intermediate values of a single haversine evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaversineTrace {
    /// latitude difference in radians
    pub delta_lat: f64,
    /// longitude difference in radians
    pub delta_lon: f64,
    pub half_chord_sq: f64,
    /// central angle in radians
    pub angular_distance: f64,
    pub distance_km: f64,
}

/// Receives diagnostic values while distances and trips are computed.
///
/// Both methods default to doing nothing, so implementors only override what
/// they care about. The results never depend on the observer.
pub trait Observer: Sync {
    fn leg(&self, _from: &dyn Point, _to: &dyn Point, _trace: &HaversineTrace) {}
    fn trips(&self, _comparison: &TripComparison) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Forwards diagnostics to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn leg(&self, from: &dyn Point, to: &dyn Point, trace: &HaversineTrace) {
        debug!("difference in latitude is {:.6} rad", trace.delta_lat);
        debug!("difference in longitude is {:.6} rad", trace.delta_lon);
        debug!("half the chord length squared is {:.6}", trace.half_chord_sq);
        debug!("angular distance is {:.6} rad", trace.angular_distance);
        debug!(
            "distance between ({}, {}) & ({}, {}) is {:.3} km",
            from.latitude(),
            from.longitude(),
            to.latitude(),
            to.longitude(),
            trace.distance_km
        );
    }

    fn trips(&self, comparison: &TripComparison) {
        debug!("xtrip is {:.3} km", comparison.x_trip);
        debug!("ytrip is {:.3} km", comparison.y_trip);
        if comparison.is_longer() {
            debug!("xtrip is longer");
        } else {
            debug!("xtrip is not longer");
        }
    }
}
