//! Small fixed-size vector helpers.

use std::array;

/// Returns `x + t * direction`.
pub(super) fn advance<const N: usize>(x: &[f64; N], direction: &[f64; N], t: f64) -> [f64; N] {
    array::from_fn(|i| x[i] + t * direction[i])
}

/// Returns `to - from`.
pub(super) fn difference<const N: usize>(from: &[f64; N], to: &[f64; N]) -> [f64; N] {
    array::from_fn(|i| to[i] - from[i])
}

pub(super) fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    v.iter().map(|vi| vi * vi).sum::<f64>().sqrt()
}

pub(super) fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    norm(&difference(a, b))
}

/// Scales `v` to unit length, or returns `None` if it has no usable length.
pub(super) fn unit<const N: usize>(v: &[f64; N]) -> Option<[f64; N]> {
    let length = norm(v);
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    Some(v.map(|vi| vi / length))
}
