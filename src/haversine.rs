use crate::error::{check_point, InvalidArgument};
use crate::observer::{HaversineTrace, LogObserver, Observer};
use crate::Point;

/// Radius used for every distance calculation in this crate.
pub const VOLUMETRIC_MEAN_RADIUS_KM: f64 = 6371.0;
/// Reference value only, not used by any calculation.
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.1;
/// Reference value only, not used by any calculation.
pub const POLAR_RADIUS_KM: f64 = 6356.8;

/// Great-circle distance in kilometers, without input validation.
///
/// Non-finite coordinates propagate into a NaN result.
pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    trace(fix1, fix2).distance_km
}

fn trace(fix1: &dyn Point, fix2: &dyn Point) -> HaversineTrace {
    const R: f64 = VOLUMETRIC_MEAN_RADIUS_KM;

    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    // subtracting degrees first overflows for large finite coordinates
    let delta_phi = phi2 - phi1;
    let delta_rho = fix2.longitude().to_radians() - fix1.longitude().to_radians();

    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_rho / 2.).sin() * (delta_rho / 2.).sin();

    // rounding can push `a` just outside of [0, 1], NaN is passed through
    let a = if a < 0. { 0. } else if a > 1. { 1. } else { a };

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    HaversineTrace {
        delta_lat: delta_phi,
        delta_lon: delta_rho,
        half_chord_sq: a,
        angular_distance: c,
        distance_km: R * c,
    }
}

/// Great-circle distance in kilometers between two points on a sphere of
/// radius [`VOLUMETRIC_MEAN_RADIUS_KM`].
///
/// Fails with [`InvalidArgument`] if any coordinate is NaN or infinite.
pub fn distance(point1: &dyn Point, point2: &dyn Point) -> Result<f64, InvalidArgument> {
    distance_with(point1, point2, &LogObserver)
}

pub fn distance_with(
    point1: &dyn Point,
    point2: &dyn Point,
    observer: &dyn Observer,
) -> Result<f64, InvalidArgument> {
    check_point(point1, "arg[0]")?;
    check_point(point2, "arg[1]")?;

    Ok(observed_distance(point1, point2, observer))
}

/// Assumes both points have already been validated.
pub(crate) fn observed_distance(fix1: &dyn Point, fix2: &dyn Point, observer: &dyn Observer) -> f64 {
    let trace = trace(fix1, fix2);
    observer.leg(fix1, fix2, &trace);
    trace.distance_km
}
