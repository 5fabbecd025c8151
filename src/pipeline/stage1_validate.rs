use crate::input::RawTable;
use crate::model::criteria::{Impact, ImpactVector, WeightVector};
use crate::model::error::TopsisError;
use crate::model::matrix::{Alternative, DecisionMatrix};

/// Identifier column plus at least two criteria.
pub const MIN_COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

pub fn run_stage1(
    table: &RawTable,
    weights: &[String],
    impacts: &[String],
) -> Result<Stage1Output, TopsisError> {
    let n_columns = table.headers.len();
    if n_columns < MIN_COLUMNS {
        return Err(TopsisError::TooFewColumns { found: n_columns });
    }
    let n_criteria = n_columns - 1;

    if weights.len() != n_criteria {
        return Err(TopsisError::ShapeMismatch {
            what: "weights".to_string(),
            expected: n_criteria,
            found: weights.len(),
        });
    }
    if impacts.len() != n_criteria {
        return Err(TopsisError::ShapeMismatch {
            what: "impacts".to_string(),
            expected: n_criteria,
            found: impacts.len(),
        });
    }

    let impacts = parse_impacts(impacts)?;
    let weights = parse_weights(weights)?;

    if table.rows.is_empty() {
        return Err(TopsisError::EmptyMatrix);
    }

    let criteria = table.headers[1..].to_vec();
    let mut alternatives = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        if row.cells.len() != n_columns {
            return Err(TopsisError::ShapeMismatch {
                what: format!("cells in data row {} (line {})", idx + 1, row.line),
                expected: n_columns,
                found: row.cells.len(),
            });
        }
        let mut values = Vec::with_capacity(n_criteria);
        for (cell, column) in row.cells[1..].iter().zip(&criteria) {
            let value = parse_real(cell).ok_or_else(|| TopsisError::NonNumericValue {
                row: idx + 1,
                column: column.clone(),
                value: cell.clone(),
            })?;
            values.push(value);
        }
        alternatives.push(Alternative {
            id: row.cells[0].trim().to_string(),
            values,
        });
    }

    tracing::debug!(
        alternatives = alternatives.len(),
        criteria = n_criteria,
        "validated decision matrix"
    );

    Ok(Stage1Output {
        matrix: DecisionMatrix::from_validated(criteria, alternatives),
        weights,
        impacts,
    })
}

fn parse_impacts(tokens: &[String]) -> Result<ImpactVector, TopsisError> {
    let mut out = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        let impact = Impact::parse(token).ok_or_else(|| TopsisError::InvalidImpact {
            position: idx + 1,
            token: token.clone(),
        })?;
        out.push(impact);
    }
    Ok(ImpactVector::from_validated(out))
}

fn parse_weights(tokens: &[String]) -> Result<WeightVector, TopsisError> {
    let mut out = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        match parse_real(token) {
            Some(w) if w > 0.0 => out.push(w),
            _ => {
                return Err(TopsisError::InvalidWeight {
                    position: idx + 1,
                    token: token.clone(),
                });
            }
        }
    }
    Ok(WeightVector::from_validated(out))
}

fn parse_real(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
