/// Linearly maps a value from one range to another while preserving its relative proportion.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (val - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}

/// Maps a unit draw in [0,1) onto [lo, hi).
#[inline]
pub fn lerp_unit(t: f64, lo: f64, hi: f64) -> f64 {
    remap(t, 0.0, 1.0, lo, hi)
}

/// Picks one of `n` equal buckets for a unit draw. Draws at or above 1.0 land in the last bucket.
#[inline]
pub fn unit_to_bucket(t: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let idx = (t.max(0.0) * n as f64).floor() as usize;
    idx.min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_unit_spans_range() {
        assert_eq!(lerp_unit(0.0, 122.0, 334.0), 122.0);
        assert!((lerp_unit(0.5, 20.0, 122.0) - 71.0).abs() < 1e-9);
    }

    #[test]
    fn buckets_match_quartile_thresholds() {
        assert_eq!(unit_to_bucket(0.0, 4), 0);
        assert_eq!(unit_to_bucket(0.2499, 4), 0);
        assert_eq!(unit_to_bucket(0.25, 4), 1);
        assert_eq!(unit_to_bucket(0.5, 4), 2);
        assert_eq!(unit_to_bucket(0.7499, 4), 2);
        assert_eq!(unit_to_bucket(0.75, 4), 3);
        assert_eq!(unit_to_bucket(0.9999, 4), 3);
        assert_eq!(unit_to_bucket(1.0, 4), 3);
        assert_eq!(unit_to_bucket(0.4, 0), 0);
    }
}
