pub trait Point: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A position in decimal degrees.
///
/// Values outside of `[-90, 90]` / `[-180, 180]` are not rejected and are
/// used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint { latitude, longitude }
    }
}

impl Point for GeoPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoPoint { latitude, longitude }
    }
}

/// A single driver's trip from `source` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub source: GeoPoint,
    pub destination: GeoPoint,
}

impl Route {
    pub fn new(source: GeoPoint, destination: GeoPoint) -> Route {
        Route { source, destination }
    }
}
