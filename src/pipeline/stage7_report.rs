use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use thiserror::Error;

use crate::input::InputBundle;
use crate::pipeline::TopsisOutcome;
use crate::pipeline::stage1_validate::Stage1Output;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    CriterionStat, InputMeta, RankedEntry, SummaryData, ToolMeta, format_score,
};

pub const SCORE_COLUMN: &str = "Topsis Score";
pub const RANK_COLUMN: &str = "Rank";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportTargets {
    pub result: PathBuf,
    pub summary: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub bundle: &'a InputBundle,
    pub validated: &'a Stage1Output,
    pub outcome: &'a TopsisOutcome,
    pub precision: Option<usize>,
    pub compact: bool,
    pub tool_name: String,
    pub tool_version: String,
}

/// All outputs are rendered in memory before the first file is written.
pub fn write_reports(input: &Stage7Input<'_>, targets: &ReportTargets) -> Result<(), ReportError> {
    let table = render_result_table(input)?;

    let summary = (targets.summary.is_some() || targets.report.is_some())
        .then(|| build_summary(input));
    let json = match (&targets.summary, &summary) {
        (Some(_), Some(data)) => Some(render_summary_json(data)?),
        _ => None,
    };
    let text = match (&targets.report, &summary) {
        (Some(_), Some(data)) => Some(render_report_text(data)),
        _ => None,
    };

    write_bytes(&targets.result, &table)?;
    tracing::info!(path = %targets.result.display(), "results have been saved");

    if let (Some(path), Some(json)) = (&targets.summary, json) {
        write_bytes(path, json.as_bytes())?;
        tracing::info!(path = %path.display(), "wrote summary");
    }
    if let (Some(path), Some(text)) = (&targets.report, text) {
        write_bytes(path, text.as_bytes())?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    Ok(())
}

pub fn render_result_table(input: &Stage7Input<'_>) -> Result<Vec<u8>, ReportError> {
    let table = &input.bundle.table;
    let rows = &input.outcome.result.rows;

    let mut w = csv::WriterBuilder::new()
        .delimiter(input.bundle.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header = if input.compact {
        vec![table.headers[0].clone()]
    } else {
        table.headers.clone()
    };
    header.push(SCORE_COLUMN.to_string());
    header.push(RANK_COLUMN.to_string());
    w.write_record(&header)?;

    for (raw, scored) in table.rows.iter().zip(rows) {
        let mut record = if input.compact {
            vec![raw.cells[0].clone()]
        } else {
            raw.cells.clone()
        };
        record.push(format_score(scored.score, input.precision));
        record.push(scored.rank.to_string());
        w.write_record(&record)?;
    }

    w.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}

pub fn build_summary(input: &Stage7Input<'_>) -> SummaryData {
    let matrix = &input.validated.matrix;
    let outcome = input.outcome;

    let criteria = matrix
        .criteria()
        .iter()
        .enumerate()
        .map(|(j, name)| CriterionStat {
            name: name.clone(),
            weight: input.validated.weights.as_slice()[j],
            impact: input.validated.impacts.as_slice()[j].symbol(),
            norm: outcome.norms[j],
            ideal_best: outcome.ideal.best[j],
            ideal_worst: outcome.ideal.worst[j],
        })
        .collect();

    let ranking = outcome
        .result
        .rank_order()
        .into_iter()
        .map(|row| {
            let scored = &outcome.result.rows[row];
            RankedEntry {
                rank: scored.rank,
                id: scored.id.clone(),
                score: scored.score,
                dist_best: outcome.dist_best[row],
                dist_worst: outcome.dist_worst[row],
            }
        })
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            path: input.bundle.path.display().to_string(),
            encoding: input.bundle.encoding.name(),
            n_alternatives: matrix.n_alternatives(),
            n_criteria: matrix.n_criteria(),
        },
        criteria,
        ranking,
        warnings: outcome
            .result
            .warnings
            .iter()
            .map(|w| w.to_string())
            .collect(),
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = BufWriter::new(File::create(path)?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(bytes)?;
        enc.finish()?.flush()?;
    } else {
        file.write_all(bytes)?;
        file.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
