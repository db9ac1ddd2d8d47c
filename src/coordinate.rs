/// Converts a degrees/minutes/seconds coordinate component to decimal degrees.
///
/// `positive` selects the sign: `true` for North & West, `false` for South &
/// East. The components are added as given, so negative or overflowing
/// minutes and seconds are not normalized.
///
/// ```
/// # use carpool::coordinate_to_float;
/// let rio_latitude = coordinate_to_float(22, 53, 43, false);
/// assert!((rio_latitude + 22.8953).abs() < 1e-4);
/// ```
pub fn coordinate_to_float(degrees: i32, minutes: i32, seconds: i32, positive: bool) -> f64 {
    let value = f64::from(degrees) + f64::from(minutes) / 60. + f64::from(seconds) / 3600.;

    if positive { value } else { -value }
}
