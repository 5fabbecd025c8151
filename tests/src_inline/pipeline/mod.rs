use super::*;
use crate::input::{RawRow, RawTable};
use crate::model::scores::ScoreWarning;
use crate::pipeline::stage1_validate::run_stage1;

fn validated(rows: &[&[&str]], weights: &str, impacts: &str) -> Stage1Output {
    let n = rows[0].len();
    let mut headers = vec!["Alternative".to_string()];
    headers.extend((1..n).map(|j| format!("C{j}")));
    let table = RawTable {
        headers,
        rows: rows
            .iter()
            .enumerate()
            .map(|(i, cells)| RawRow {
                line: i + 2,
                cells: cells.iter().map(|c| c.to_string()).collect(),
            })
            .collect(),
    };
    let split = |s: &str| s.split(',').map(|t| t.to_string()).collect::<Vec<_>>();
    run_stage1(&table, &split(weights), &split(impacts)).unwrap()
}

fn scores(outcome: &TopsisOutcome) -> Vec<f64> {
    outcome.result.rows.iter().map(|r| r.score).collect()
}

fn ranks(outcome: &TopsisOutcome) -> Vec<u32> {
    outcome.result.rows.iter().map(|r| r.rank).collect()
}

fn phones() -> Vec<Vec<String>> {
    [
        ["M1", "250", "16", "12", "5"],
        ["M2", "200", "16", "8", "3"],
        ["M3", "300", "32", "16", "4"],
        ["M4", "275", "32", "8", "4"],
        ["M5", "225", "16", "16", "2"],
    ]
    .iter()
    .map(|r| r.iter().map(|c| c.to_string()).collect())
    .collect()
}

fn as_rows(rows: &[Vec<String>]) -> Vec<Vec<&str>> {
    rows.iter()
        .map(|r| r.iter().map(String::as_str).collect())
        .collect()
}

fn run_rows(rows: &[Vec<String>], weights: &str, impacts: &str) -> TopsisOutcome {
    let borrowed = as_rows(rows);
    let refs = borrowed.iter().map(Vec::as_slice).collect::<Vec<_>>();
    run_topsis(&validated(&refs, weights, impacts)).unwrap()
}

#[test]
fn test_reference_scenario() {
    let input = validated(
        &[&["A", "1", "2", "1"], &["B", "2", "1", "2"], &["C", "3", "3", "3"]],
        "1,1,1",
        "+,+,-",
    );
    let out = run_topsis(&input).unwrap();
    let s = scores(&out);

    // Every column has norm sqrt(14); best = (3,3,1)/sqrt(14), worst = (1,1,3)/sqrt(14).
    assert!((s[0] - 0.5).abs() < 1e-4);
    assert!((s[1] - 0.3660).abs() < 1e-4);
    assert!((s[2] - 0.5858).abs() < 1e-4);
    assert!((s[1] - 1.0 / (1.0 + 3f64.sqrt())).abs() < 1e-12);
    assert!((s[2] - (2.0 - 2f64.sqrt())).abs() < 1e-12);
    assert_eq!(ranks(&out), vec![2, 3, 1]);
    assert_eq!(out.result.rows[2].id, "C");
    assert!(out.result.warnings.is_empty());

    for norm in &out.norms {
        assert!((norm - 14f64.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn test_phone_dataset() {
    let out = run_rows(&phones(), "0.25,0.25,0.25,0.25", "-,+,+,+");
    let expected = [0.534277, 0.308368, 0.691632, 0.534737, 0.401046];
    for (got, want) in scores(&out).iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{got} vs {want}");
    }
    assert_eq!(ranks(&out), vec![3, 5, 1, 2, 4]);
}

#[test]
fn test_uniform_weight_scaling_is_neutral() {
    let a = run_rows(&phones(), "0.25,0.25,0.25,0.25", "-,+,+,+");
    let b = run_rows(&phones(), "1,1,1,1", "-,+,+,+");
    for (x, y) in scores(&a).iter().zip(scores(&b)) {
        assert!((x - y).abs() < 1e-12);
    }
    assert_eq!(ranks(&a), ranks(&b));
}

#[test]
fn test_extreme_weight_keeps_scores_defined() {
    let input = validated(
        &[&["A", "1", "5"], &["B", "3", "2"], &["C", "2", "4"]],
        "1e200,1",
        "+,+",
    );
    let out = run_topsis(&input).unwrap();
    let s = scores(&out);
    assert!(s.iter().all(|v| (0.0..=1.0).contains(v)), "{s:?}");
    assert!(s[0] < 1e-12);
    assert!((s[1] - 1.0).abs() < 1e-12);
    assert!((s[2] - 0.5).abs() < 1e-12);
    assert_eq!(ranks(&out), vec![3, 1, 2]);
    assert!(out.result.warnings.is_empty());
    assert!(out.dist_best.iter().chain(&out.dist_worst).all(|d| d.is_finite()));
}

#[test]
fn test_tiny_values_are_not_degenerate() {
    let input = validated(
        &[&["A", "1e-170", "2"], &["B", "3e-170", "1"], &["C", "2e-170", "2.5"]],
        "1,1",
        "+,-",
    );
    let out = run_topsis(&input).unwrap();
    assert_eq!(ranks(&out), vec![3, 1, 2]);
}

#[test]
fn test_single_row_is_undefined_not_fatal() {
    let input = validated(&[&["Solo", "4", "2", "9"]], "1,2,3", "+,-,+");
    let out = run_topsis(&input).unwrap();
    assert_eq!(scores(&out), vec![0.0]);
    assert_eq!(ranks(&out), vec![1]);
    assert_eq!(
        out.result.warnings,
        vec![ScoreWarning::UndefinedScore {
            row: 1,
            id: "Solo".to_string(),
        }]
    );
}

#[test]
fn test_identical_rows_all_undefined() {
    let input = validated(&[&["A", "1", "2"], &["B", "1", "2"]], "1,1", "+,-");
    let out = run_topsis(&input).unwrap();
    assert_eq!(scores(&out), vec![0.0, 0.0]);
    assert_eq!(ranks(&out), vec![1, 1]);
    assert_eq!(out.result.warnings.len(), 2);
}

#[test]
fn test_all_zero_column_fails() {
    let input = validated(&[&["A", "1", "0"], &["B", "2", "0"]], "1,1", "+,+");
    let err = run_topsis(&input).unwrap_err();
    assert!(matches!(err, TopsisError::DegenerateColumn { ref column, .. } if column == "C2"));
}

#[test]
fn test_duplicate_rows_tie() {
    let input = validated(
        &[&["A", "1", "2"], &["B", "1", "2"], &["C", "3", "1"], &["D", "2", "2"]],
        "1,1",
        "+,-",
    );
    let out = run_topsis(&input).unwrap();
    let s = scores(&out);
    assert_eq!(s[0].to_bits(), s[1].to_bits());
    assert_eq!(ranks(&out), vec![3, 3, 1, 2]);
}

#[test]
fn test_scores_within_unit_interval() {
    let outcomes = vec![
        run_topsis(&validated(
            &[&["a", "-3", "5"], &["b", "2", "-1"], &["c", "0.5", "0.5"]],
            "1,3",
            "+,-",
        )),
        run_topsis(&validated(
            &[&["a", "1e-9", "7"], &["b", "1e9", "7"], &["c", "3", "8"]],
            "0.1,10",
            "-,+",
        )),
        run_topsis(&validated(
            &[&["a", "1", "1"], &["b", "1", "1"], &["c", "1", "2"]],
            "2,2",
            "+,+",
        )),
    ];
    for out in outcomes {
        for s in scores(&out.unwrap()) {
            assert!((0.0..=1.0).contains(&s), "score {s} out of range");
        }
    }
}

#[test]
fn test_beneficial_increase_never_lowers_score() {
    let mut rows = phones();
    let mut prev = f64::NEG_INFINITY;
    for v in ["5", "6", "7", "8", "10"] {
        rows[0][4] = v.to_string();
        let out = run_rows(&rows, "1,1,1,1", "-,+,+,+");
        let score = out.result.rows[0].score;
        assert!(score >= prev, "{score} < {prev} at value {v}");
        prev = score;
    }
}

#[test]
fn test_idempotent() {
    let a = run_rows(&phones(), "1,2,1,1", "-,+,+,-");
    let b = run_rows(&phones(), "1,2,1,1", "-,+,+,-");
    let bits = |o: &TopsisOutcome| scores(o).iter().map(|s| s.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
    assert_eq!(ranks(&a), ranks(&b));
    assert_eq!(a.ideal, b.ideal);
}

#[test]
fn test_rows_keep_input_order() {
    let out = run_rows(&phones(), "1,1,1,1", "-,+,+,+");
    let ids = out
        .result
        .rows
        .iter()
        .map(|r| r.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["M1", "M2", "M3", "M4", "M5"]);
    assert_eq!(out.result.rank_order(), vec![2, 3, 0, 4, 1]);
}
