use crate::model::criteria::{Impact, ImpactVector};

#[derive(Debug, Clone, PartialEq)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// `weighted` must be non-empty and rectangular with one column per impact.
pub fn run_stage4(weighted: &[Vec<f64>], impacts: &ImpactVector) -> IdealPoints {
    let n_criteria = impacts.len();
    let mut best = Vec::with_capacity(n_criteria);
    let mut worst = Vec::with_capacity(n_criteria);

    for (j, impact) in impacts.as_slice().iter().enumerate() {
        let (min, max) = column_extrema(weighted, j);
        match impact {
            Impact::Beneficial => {
                best.push(max);
                worst.push(min);
            }
            Impact::NonBeneficial => {
                best.push(min);
                worst.push(max);
            }
        }
    }

    tracing::debug!(?best, ?worst, "derived ideal points");

    IdealPoints { best, worst }
}

fn column_extrema(weighted: &[Vec<f64>], j: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in weighted {
        let v = row[j];
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}
