#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Beneficial,
    NonBeneficial,
}

impl Impact {
    /// Accepts `+`/`max` and `-`/`min`, ignoring surrounding whitespace and case.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token == "+" || token.eq_ignore_ascii_case("max") {
            Some(Impact::Beneficial)
        } else if token == "-" || token.eq_ignore_ascii_case("min") {
            Some(Impact::NonBeneficial)
        } else {
            None
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Impact::Beneficial => "+",
            Impact::NonBeneficial => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub(crate) fn from_validated(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub(crate) fn from_validated(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
