#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAlternative {
    pub id: String,
    pub score: f64,
    pub rank: u32,
}

/// Non-fatal condition raised while scoring a single alternative.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreWarning {
    /// Distances to both ideal points were zero; the score was set to 0.
    UndefinedScore { row: usize, id: String },
}

impl std::fmt::Display for ScoreWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreWarning::UndefinedScore { row, id } => write!(
                f,
                "undefined score for {id:?} (row {row}): alternative coincides with both ideal points; score set to 0"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub rows: Vec<ScoredAlternative>,
    pub warnings: Vec<ScoreWarning>,
}

impl ScoreResult {
    /// Row indices in rank order; ties keep input order.
    pub fn rank_order(&self) -> Vec<usize> {
        let mut order = (0..self.rows.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| match self.rows[a].rank.cmp(&self.rows[b].rank) {
            std::cmp::Ordering::Equal => a.cmp(&b),
            other => other,
        });
        order
    }
}
