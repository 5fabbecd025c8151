/// Standard competition ranking ("1224") by descending score.
///
/// Equal scores share the rank of the first tied row; the next distinct
/// score resumes at that rank plus the size of the tie group. Ties are
/// visited in input order so the output is reproducible.
pub fn run_stage6(scores: &[f64]) -> Vec<u32> {
    let order = descending_order(scores);
    let mut ranks = vec![0u32; scores.len()];

    let mut prev: Option<(f64, u32)> = None;
    for (pos, &row) in order.iter().enumerate() {
        let score = scores[row];
        let rank = match prev {
            Some((prev_score, prev_rank)) if prev_score == score => prev_rank,
            _ => pos as u32 + 1,
        };
        ranks[row] = rank;
        prev = Some((score, rank));
    }

    ranks
}

fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order = (0..scores.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_rank.rs"]
mod tests;
