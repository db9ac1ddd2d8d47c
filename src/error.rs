use failure::Fail;

use crate::point::{Point, Route};

/// Raised before any computation when an input component is unusable.
///
/// `path` locates the offending value positionally: `arg[1][0][1]` is the
/// longitude (`[1]`) of the source (`[0]`) of the second argument (`arg[1]`).
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
#[fail(display = "invalid argument at {}: {}", path, reason)]
pub struct InvalidArgument {
    pub path: String,
    pub reason: &'static str,
}

impl InvalidArgument {
    /// Prepends `prefix` to the path, e.g. `[0][1]` becomes `candidates[2][0][1]`.
    pub(crate) fn within(self, prefix: &str) -> InvalidArgument {
        InvalidArgument {
            path: format!("{}{}", prefix, self.path),
            reason: self.reason,
        }
    }
}

fn check_component(value: f64) -> Result<(), &'static str> {
    if value.is_nan() {
        Err("value is NaN")
    } else if value.is_infinite() {
        Err("value is infinite")
    } else {
        Ok(())
    }
}

pub(crate) fn check_point(point: &dyn Point, prefix: &str) -> Result<(), InvalidArgument> {
    let components = [point.latitude(), point.longitude()];

    for (index, value) in components.iter().enumerate() {
        check_component(*value).map_err(|reason| InvalidArgument {
            path: format!("{}[{}]", prefix, index),
            reason,
        })?;
    }

    Ok(())
}

pub(crate) fn check_route(route: &Route, prefix: &str) -> Result<(), InvalidArgument> {
    let endpoints = [&route.source, &route.destination];

    for (index, endpoint) in endpoints.iter().enumerate() {
        check_point(*endpoint, "").map_err(|err| err.within(&format!("{}[{}]", prefix, index)))?;
    }

    Ok(())
}
