pub mod norm;
pub mod stage1_validate;
pub mod stage2_normalize;
pub mod stage3_weight;
pub mod stage4_ideal;
pub mod stage5_scores;
pub mod stage6_rank;
pub mod stage7_report;

use crate::model::error::TopsisError;
use crate::model::scores::{ScoreResult, ScoredAlternative};
use stage1_validate::Stage1Output;
use stage2_normalize::run_stage2;
use stage3_weight::run_stage3;
use stage4_ideal::{IdealPoints, run_stage4};
use stage5_scores::{Stage5Inputs, run_stage5};
use stage6_rank::run_stage6;

/// Everything one scoring pass derives from a validated input.
#[derive(Debug, Clone)]
pub struct TopsisOutcome {
    pub result: ScoreResult,
    pub norms: Vec<f64>,
    pub ideal: IdealPoints,
    pub dist_best: Vec<f64>,
    pub dist_worst: Vec<f64>,
}

pub fn run_topsis(input: &Stage1Output) -> Result<TopsisOutcome, TopsisError> {
    let stage2 = run_stage2(&input.matrix)?;
    let weighted = run_stage3(&stage2.normalized, &input.weights);
    let ideal = run_stage4(&weighted, &input.impacts);

    let ids = input.matrix.ids();
    let stage5 = run_stage5(&Stage5Inputs {
        ids: &ids,
        weighted: &weighted,
        ideal: &ideal,
    });
    let ranks = run_stage6(&stage5.scores);

    let rows = ids
        .iter()
        .zip(&stage5.scores)
        .zip(&ranks)
        .map(|((id, &score), &rank)| ScoredAlternative {
            id: id.to_string(),
            score,
            rank,
        })
        .collect();

    Ok(TopsisOutcome {
        result: ScoreResult {
            rows,
            warnings: stage5.warnings,
        },
        norms: stage2.norms,
        ideal,
        dist_best: stage5.dist_best,
        dist_worst: stage5.dist_worst,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
