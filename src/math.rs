#[must_use]
#[inline]
pub fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .fold(0.0, |dot, (left, right)| dot + left * right)
}
