#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub id: String,
    pub values: Vec<f64>,
}

/// Validated decision matrix: every alternative carries exactly one value per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Callers must guarantee the row widths match `criteria`; the validator does.
    pub(crate) fn from_validated(criteria: Vec<String>, alternatives: Vec<Alternative>) -> Self {
        debug_assert!(
            alternatives
                .iter()
                .all(|alt| alt.values.len() == criteria.len())
        );
        Self {
            criteria,
            alternatives,
        }
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn n_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.alternatives.iter().map(|alt| alt.id.as_str()).collect()
    }

    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives
            .iter()
            .map(move |alt| alt.values[criterion])
    }
}
