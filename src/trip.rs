use crate::error::{check_route, InvalidArgument};
use crate::haversine::observed_distance;
use crate::observer::{LogObserver, Observer};
use crate::point::Route;

/// Total lengths of the two ways two drivers can share a ride.
///
/// For the routes `x = a -> b` and `y = c -> d`:
///
/// ```text
/// x_trip:  a -> c -> d -> b   (x picks up y)
/// y_trip:  c -> a -> b -> d   (y picks up x)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripComparison {
    pub x_trip: f64,
    pub y_trip: f64,
}

impl TripComparison {
    /// `true` if the first driver's detour is longer. Equal lengths are
    /// not longer.
    pub fn is_longer(&self) -> bool {
        self.x_trip > self.y_trip
    }

    pub fn shorter_detour(&self) -> f64 {
        if self.is_longer() { self.y_trip } else { self.x_trip }
    }

    pub fn longer_detour(&self) -> f64 {
        if self.is_longer() { self.x_trip } else { self.y_trip }
    }
}

pub fn compare_trips(x: &Route, y: &Route) -> Result<TripComparison, InvalidArgument> {
    compare_trips_with(x, y, &LogObserver)
}

pub fn compare_trips_with(
    x: &Route,
    y: &Route,
    observer: &dyn Observer,
) -> Result<TripComparison, InvalidArgument> {
    check_route(x, "arg[0]")?;
    check_route(y, "arg[1]")?;

    Ok(compare_validated(x, y, observer))
}

/// Assumes both routes have already been validated.
pub(crate) fn compare_validated(x: &Route, y: &Route, observer: &dyn Observer) -> TripComparison {
    let (a, b) = (&x.source, &x.destination);
    let (c, d) = (&y.source, &y.destination);

    let x_trip: f64 = [(a, c), (c, d), (d, b)]
        .iter()
        .map(|(from, to)| observed_distance(*from, *to, observer))
        .sum();

    let y_trip: f64 = [(c, a), (a, b), (b, d)]
        .iter()
        .map(|(from, to)| observed_distance(*from, *to, observer))
        .sum();

    let comparison = TripComparison { x_trip, y_trip };
    observer.trips(&comparison);
    comparison
}

/// Decides whether picking up the second driver costs the first driver more
/// than the other way around.
///
/// Returns `true` if `a -> c -> d -> b` is strictly longer than
/// `c -> a -> b -> d`, where `x = a -> b` and `y = c -> d`.
pub fn is_longer_trip(x: &Route, y: &Route) -> Result<bool, InvalidArgument> {
    Ok(compare_trips(x, y)?.is_longer())
}
