use log::{debug, trace};
use ord_subset::OrdSubsetIterExt;

use crate::error::{check_route, InvalidArgument};
use crate::observer::NullObserver;
use crate::parallel::opt_par_map;
use crate::point::Route;
use crate::trip::{compare_validated, TripComparison};

/// The best carpool partner found by [`best_partner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// index into the candidate list
    pub index: usize,
    pub comparison: TripComparison,
}

impl Match {
    /// Shorter of the two shared trips, in kilometers.
    pub fn detour(&self) -> f64 {
        self.comparison.shorter_detour()
    }
}

/// Compares every `(x, y)` pair like [`compare_trips`](crate::compare_trips).
///
/// All pairs are validated before anything is computed. Error paths are
/// prefixed with the pair index, e.g. `pairs[3].arg[0][1][0]`.
pub fn compare_all(pairs: &[(Route, Route)]) -> Result<Vec<TripComparison>, InvalidArgument> {
    for (index, (x, y)) in pairs.iter().enumerate() {
        check_route(x, "arg[0]")
            .and_then(|_| check_route(y, "arg[1]"))
            .map_err(|err| err.within(&format!("pairs[{}].", index)))?;
    }

    debug!("Comparing {} route pairs", pairs.len());
    let comparisons = opt_par_map(pairs, |(x, y)| compare_validated(x, y, &NullObserver));
    trace!("Comparisons: {:?}", comparisons);

    Ok(comparisons)
}

/// Finds the candidate that shares a ride with `driver` at the smallest
/// detour, i.e. the smallest [`TripComparison::shorter_detour`].
///
/// Returns `None` if there are no candidates. On equal detours the lowest
/// index wins.
pub fn best_partner(driver: &Route, candidates: &[Route]) -> Result<Option<Match>, InvalidArgument> {
    check_route(driver, "driver")?;
    for (index, candidate) in candidates.iter().enumerate() {
        check_route(candidate, "").map_err(|err| err.within(&format!("candidates[{}]", index)))?;
    }

    debug!("Comparing driver against {} candidates", candidates.len());
    let comparisons = opt_par_map(candidates, |candidate| compare_validated(driver, candidate, &NullObserver));

    let best = comparisons
        .into_iter()
        .enumerate()
        .map(|(index, comparison)| Match { index, comparison })
        .ord_subset_min_by_key(|candidate| candidate.detour());

    match best {
        Some(ref m) => debug!("Best partner: #{} ({:.3} km)", m.index, m.detour()),
        None => debug!("No partner found"),
    }

    Ok(best)
}
