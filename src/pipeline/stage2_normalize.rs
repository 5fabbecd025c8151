use crate::model::error::TopsisError;
use crate::model::matrix::DecisionMatrix;
use crate::pipeline::norm::{l2_norm, max_abs};

#[derive(Debug, Clone)]
pub struct Stage2Output {
    /// Euclidean norm of each criterion column.
    pub norms: Vec<f64>,
    /// Row-major, same shape as the decision matrix.
    pub normalized: Vec<Vec<f64>>,
}

pub fn run_stage2(matrix: &DecisionMatrix) -> Result<Stage2Output, TopsisError> {
    let columns = (0..matrix.n_criteria())
        .map(|j| matrix.column(j).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    for (values, column) in columns.iter().zip(matrix.criteria()) {
        if values.iter().all(|v| *v == 0.0) {
            return Err(TopsisError::DegenerateColumn {
                column: column.clone(),
            });
        }
    }

    let norms = columns.iter().map(|values| l2_norm(values)).collect::<Vec<_>>();
    let unit_columns = columns
        .iter()
        .zip(&norms)
        .map(|(values, norm)| unit_column(values, *norm))
        .collect::<Vec<_>>();

    let normalized = (0..matrix.n_alternatives())
        .map(|i| unit_columns.iter().map(|col| col[i]).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    tracing::debug!(?norms, "normalized decision matrix");

    Ok(Stage2Output { norms, normalized })
}

fn unit_column(values: &[f64], norm: f64) -> Vec<f64> {
    if norm.is_finite() {
        return values.iter().map(|v| v / norm).collect();
    }
    // Norm exceeds f64::MAX; divide by the largest magnitude first.
    let scale = max_abs(values);
    let scaled = values.iter().map(|v| v / scale).collect::<Vec<_>>();
    let unit = l2_norm(&scaled);
    scaled.iter().map(|v| v / unit).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
