//! Compares the two ways two drivers can share a ride, using great-circle
//! (haversine) distances on a spherical Earth.

extern crate cfg_if;
extern crate failure;
extern crate log;
extern crate ord_subset;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod coordinate;
pub mod error;
pub mod haversine;
pub mod matching;
pub mod observer;
pub mod trip;

mod parallel;
mod point;

pub use crate::coordinate::coordinate_to_float;
pub use crate::error::InvalidArgument;
pub use crate::haversine::{distance, distance_with, haversine_distance};
pub use crate::matching::{best_partner, compare_all, Match};
pub use crate::observer::{HaversineTrace, LogObserver, NullObserver, Observer};
pub use crate::point::{GeoPoint, Point, Route};
pub use crate::trip::{compare_trips, compare_trips_with, is_longer_trip, TripComparison};
