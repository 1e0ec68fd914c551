//! Float comparison for simulated quantities.
//!
//! Volumes and pressures accumulate thousands of add/remove operations per
//! simulated second, so exact equality is only meaningful for values that
//! were never touched. Everything else compares through [`nearly_equal`].

/// Absolute plus relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within the absolute tolerance, or within the
/// relative tolerance scaled by the larger magnitude.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_tolerance_handles_values_near_zero() {
        let tol = Tolerances::default();
        assert!(nearly_equal(0.0, 5e-13, tol));
        assert!(!nearly_equal(0.0, 1e-10, tol));
    }

    #[test]
    fn relative_tolerance_scales_with_magnitude() {
        let tol = Tolerances::default();
        // 120 mmHg +/- a few ulps of accumulated error
        assert!(nearly_equal(120.0, 120.0 + 1e-8, tol));
        assert!(!nearly_equal(120.0, 120.1, tol));
    }

    #[test]
    fn symmetric_in_arguments() {
        let tol = Tolerances::default();
        assert_eq!(nearly_equal(0.16, 0.08, tol), nearly_equal(0.08, 0.16, tol));
    }
}
