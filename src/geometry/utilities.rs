//! Geometry utility functions
//!
//! Small comparisons shared by the classifier and its tests.

/// True when `value` lies strictly inside the open interval spanned by `a`
/// and `b`, in either order
pub fn strictly_between(value: f64, a: f64, b: f64) -> bool {
    a.min(b) < value && a.max(b) > value
}

/// Equality with an absolute tolerance. A tolerance of zero is exact `==`.
pub fn nearly_equal(a: f64, b: f64, tolerance: f64) -> bool {
    if tolerance > 0.0 {
        (a - b).abs() <= tolerance
    } else {
        a == b
    }
}
