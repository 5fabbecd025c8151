use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("TOPSIS Ranking Report\n");
    out.push_str("=====================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("File: {}\n", data.input.path));
    out.push_str(&format!("Encoding: {}\n", data.input.encoding));
    out.push_str(&format!(
        "Alternatives: {}\nCriteria: {}\n\n",
        data.input.n_alternatives, data.input.n_criteria
    ));

    out.push_str("2. Criteria\n");
    out.push_str("criterion\tweight\timpact\tnorm\tideal_best\tideal_worst\n");
    for c in &data.criteria {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            c.name,
            c.weight,
            c.impact,
            format_f64_6(c.norm),
            format_f64_6(c.ideal_best),
            format_f64_6(c.ideal_worst)
        ));
    }
    out.push('\n');

    out.push_str("3. Ranking\n");
    out.push_str("rank\talternative\tscore\tdist_best\tdist_worst\n");
    for r in &data.ranking {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            r.rank,
            r.id,
            format_f64_6(r.score),
            format_f64_6(r.dist_best),
            format_f64_6(r.dist_worst)
        ));
    }
    out.push_str(&format!("Conclusion: {}\n\n", conclusion(data)));

    out.push_str("4. Warnings\n");
    if data.warnings.is_empty() {
        out.push_str("none\n");
    } else {
        for w in &data.warnings {
            out.push_str(&format!("- {}\n", w));
        }
    }

    out
}

fn conclusion(data: &SummaryData) -> String {
    let leaders = data
        .ranking
        .iter()
        .filter(|r| r.rank == 1)
        .map(|r| r.id.as_str())
        .collect::<Vec<_>>();
    match leaders.as_slice() {
        [] => "no alternatives ranked".to_string(),
        [single] => format!("{} is the preferred alternative", single),
        many => format!("tie for first place between {}", many.join(", ")),
    }
}
