use crate::model::criteria::WeightVector;

pub fn run_stage3(normalized: &[Vec<f64>], weights: &WeightVector) -> Vec<Vec<f64>> {
    normalized
        .iter()
        .map(|row| {
            row.iter()
                .zip(weights.as_slice())
                .map(|(n, w)| n * w)
                .collect()
        })
        .collect()
}
