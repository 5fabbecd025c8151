use crate::model::scores::ScoreWarning;
use crate::pipeline::norm::{l2_norm, max_abs};
use crate::pipeline::stage4_ideal::IdealPoints;

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub ids: &'a [&'a str],
    pub weighted: &'a [Vec<f64>],
    pub ideal: &'a IdealPoints,
}

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub dist_best: Vec<f64>,
    pub dist_worst: Vec<f64>,
    pub scores: Vec<f64>,
    pub warnings: Vec<ScoreWarning>,
}

pub fn run_stage5(inputs: &Stage5Inputs<'_>) -> Stage5Output {
    let n_rows = inputs.weighted.len();
    let mut dist_best = Vec::with_capacity(n_rows);
    let mut dist_worst = Vec::with_capacity(n_rows);
    let mut scores = Vec::with_capacity(n_rows);
    let mut warnings = Vec::new();
    let scale = max_abs(&inputs.ideal.best).max(max_abs(&inputs.ideal.worst));

    for (row, values) in inputs.weighted.iter().enumerate() {
        let d_best = euclidean(values, &inputs.ideal.best);
        let d_worst = euclidean(values, &inputs.ideal.worst);

        // Distances too large to add are compared relative to the largest ideal value.
        let (numer, denom) = if (d_best + d_worst).is_finite() {
            (d_worst, d_best + d_worst)
        } else {
            let u_best = scaled_euclidean(values, &inputs.ideal.best, scale);
            let u_worst = scaled_euclidean(values, &inputs.ideal.worst, scale);
            (u_worst, u_best + u_worst)
        };

        // Only reachable when the row is both ideal points at once.
        let score = if denom == 0.0 {
            let id = inputs.ids.get(row).copied().unwrap_or_default();
            tracing::warn!(row = row + 1, id, "undefined closeness; scoring as 0");
            warnings.push(ScoreWarning::UndefinedScore {
                row: row + 1,
                id: id.to_string(),
            });
            0.0
        } else {
            numer / denom
        };

        dist_best.push(d_best);
        dist_worst.push(d_worst);
        scores.push(score);
    }

    Stage5Output {
        dist_best,
        dist_worst,
        scores,
        warnings,
    }
}

pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let diffs = a.iter().zip(b).map(|(x, y)| x - y).collect::<Vec<_>>();
    l2_norm(&diffs)
}

fn scaled_euclidean(a: &[f64], b: &[f64], scale: f64) -> f64 {
    let diffs = a
        .iter()
        .zip(b)
        .map(|(x, y)| x / scale - y / scale)
        .collect::<Vec<_>>();
    l2_norm(&diffs)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_scores.rs"]
mod tests;
