/// Euclidean length of `values`. Falls back to a rescaled sum when the plain
/// sum of squares overflows or loses precision to underflow.
pub fn l2_norm(values: &[f64]) -> f64 {
    let sum = values.iter().fold(0f64, |acc, v| acc + v * v);
    if sum.is_normal() {
        return sum.sqrt();
    }

    let scale = max_abs(values);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let unit = values.iter().fold(0f64, |acc, v| {
        let r = v / scale;
        acc + r * r
    });
    scale * unit.sqrt()
}

pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0f64, |m, v| m.max(v.abs()))
}
