//! Common utilities for interpolation and bucketing.

/// Clamp a signed bucket index into `[0, size - 1]`
pub fn clamp_index(index: i64, size: usize) -> usize {
    if size == 0 || index <= 0 {
        return 0;
    }
    (index as usize).min(size - 1)
}

/// Get the weights for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}

/// Locate `x` inside ascending `breakpoints`.
///
/// Returns the index `j` of the segment `[breakpoints[j], breakpoints[j + 1])`
/// together with the fractional position of `x` in it, or `None` when `x`
/// lies outside the open range or is NaN.
pub fn segment(x: f64, breakpoints: &[f64]) -> Option<(usize, f64)> {
    let n = breakpoints.len();
    if n < 2 || x.is_nan() || x < breakpoints[0] || x >= breakpoints[n - 1] {
        return None;
    }
    let j = breakpoints.partition_point(|&b| b <= x) - 1;
    let fraction = (x - breakpoints[j]) / (breakpoints[j + 1] - breakpoints[j]);
    Some((j, fraction))
}

/// Number of ascending `bins` that are less than or equal to `x`.
///
/// This is the bin number of `x` with right-open bins: 0 below the first
/// edge, `bins.len()` at or above the last. NaN sorts after every edge.
pub fn digitize(x: f64, bins: &[f64]) -> usize {
    if x.is_nan() {
        return bins.len();
    }
    bins.partition_point(|&b| b <= x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-1, 10), 0);
        assert_eq!(clamp_index(5, 10), 5);
        assert_eq!(clamp_index(15, 10), 9);
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn test_linear_weight() {
        let (w0, w1) = linear_weight(0.3);
        assert!((w0 - 0.7).abs() < 1e-10);
        assert!((w1 - 0.3).abs() < 1e-10);
        assert!((w0 + w1 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment() {
        let bps = [0.0, 1.0, 3.0];
        assert_eq!(segment(-0.5, &bps), None);
        assert_eq!(segment(0.0, &bps), Some((0, 0.0)));
        assert_eq!(segment(0.5, &bps), Some((0, 0.5)));
        assert_eq!(segment(2.0, &bps), Some((1, 0.5)));
        assert_eq!(segment(3.0, &bps), None);
        assert_eq!(segment(f64::NAN, &bps), None);
        assert_eq!(segment(0.5, &[0.0]), None);
    }

    #[test]
    fn test_digitize() {
        let bins = [0.0, 1.0, 2.0];
        assert_eq!(digitize(-1.0, &bins), 0);
        assert_eq!(digitize(0.0, &bins), 1);
        assert_eq!(digitize(0.5, &bins), 1);
        assert_eq!(digitize(1.0, &bins), 2);
        assert_eq!(digitize(2.5, &bins), 3);
        assert_eq!(digitize(f64::NAN, &bins), 3);
    }
}
