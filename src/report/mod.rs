use serde::Serialize;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub path: String,
    pub encoding: &'static str,
    pub n_alternatives: usize,
    pub n_criteria: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionStat {
    pub name: String,
    pub weight: f64,
    pub impact: &'static str,
    pub norm: f64,
    pub ideal_best: f64,
    pub ideal_worst: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub id: String,
    pub score: f64,
    pub dist_best: f64,
    pub dist_worst: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub criteria: Vec<CriterionStat>,
    pub ranking: Vec<RankedEntry>,
    pub warnings: Vec<String>,
}

pub fn format_score(v: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, v),
        None => format!("{}", v),
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
