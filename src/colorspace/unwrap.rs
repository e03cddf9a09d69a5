//! Hue unwrapping.

/// Remove wrap-around jumps from a sequence of hue angles in degrees.
///
/// Whenever two consecutive hues differ by 180 degrees or more, the second
/// one (and everything after it) is shifted by a multiple of 360 so that the
/// step between them becomes the shorter rotation around the wheel. The
/// first hue is never changed.
pub fn unwrap_hues(hues: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(hues.len());
    let Some(&first) = hues.first() else {
        return unwrapped;
    };
    unwrapped.push(first);

    let mut offset = 0.0;
    for pair in hues.windows(2) {
        let step = pair[1] - pair[0];
        if step.abs() >= 180.0 {
            let mut wrapped = (step + 180.0).rem_euclid(360.0) - 180.0;
            // A jump of exactly half a turn keeps its original direction.
            if wrapped == -180.0 && step > 0.0 {
                wrapped = 180.0;
            }
            offset += wrapped - step;
        }
        unwrapped.push(pair[1] + offset);
    }
    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_short_steps_are_untouched() {
        assert_close(&unwrap_hues(&[10.0, 90.0, 170.0]), &[10.0, 90.0, 170.0]);
    }

    #[test]
    fn test_forward_wrap() {
        // 350 -> 10 should continue upward through 360
        assert_close(&unwrap_hues(&[350.0, 10.0]), &[350.0, 370.0]);
    }

    #[test]
    fn test_backward_wrap() {
        assert_close(&unwrap_hues(&[10.0, 350.0]), &[10.0, -10.0]);
    }

    #[test]
    fn test_offsets_accumulate() {
        assert_close(
            &unwrap_hues(&[300.0, 20.0, 100.0, 30.0, 300.0]),
            &[300.0, 380.0, 460.0, 390.0, 300.0],
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(unwrap_hues(&[]).is_empty());
        assert_close(&unwrap_hues(&[42.0]), &[42.0]);
    }
}
