/// Cubic smoothstep `3x² − 2x³`; input clamped to [0, 1].
///
/// Zero slope at both ends and monotonic in between, so an interpolated
/// position never leaves the segment between its two samples.
#[inline]
pub fn smoothstep(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Fraction of a transition completed after `elapsed` seconds, in [0, 1].
#[inline]
pub fn transition_weight(elapsed: f64, window: f64) -> f64 {
    if window <= 0.0 {
        return 1.0;
    }
    (elapsed / window).clamp(0.0, 1.0)
}
