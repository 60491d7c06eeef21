/// Closeness check used to decide whether a reduced value hits the target.
///
/// Identical values (including equal infinities) always match. Otherwise the
/// difference must be within `max(relative * max(|a|, |b|), absolute)`.
#[inline]
pub fn approx_eq(a: f64, b: f64, absolute: f64, relative: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= (relative * a.abs().max(b.abs())).max(absolute)
}
