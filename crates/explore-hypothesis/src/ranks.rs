//! Average ranks and tie bookkeeping for the rank-based tests

/// 1-based ranks aligned with `values`; ties share the average of their ranks
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Positions i..j are tied
        let rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = rank;
        }
        i = j;
    }
    ranks
}

/// Sizes of the groups of tied values (groups of one included)
pub fn tie_groups(values: &[f64]) -> Vec<usize> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut groups = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        groups.push(j - i);
        i = j;
    }
    groups
}

/// `Σ (t³ - t)` over the tie groups
pub fn tie_term(values: &[f64]) -> f64 {
    tie_groups(values)
        .into_iter()
        .map(|t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum()
}

/// Whether any value occurs more than once
pub fn has_ties(values: &[f64]) -> bool {
    tie_groups(values).into_iter().any(|t| t > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_ranks_with_ties() {
        let ranks = average_ranks(&[10.0, 20.0, 10.0, 30.0, 20.0, 20.0]);
        assert_eq!(ranks, vec![1.5, 4.0, 1.5, 6.0, 4.0, 4.0]);
    }

    #[test]
    fn test_rank_sum_invariant() {
        let values = [3.1, -2.0, 3.1, 7.5, 0.0, 3.1, 9.9];
        let n = values.len() as f64;
        let sum: f64 = average_ranks(&values).iter().sum();
        assert_eq!(sum, n * (n + 1.0) / 2.0);
    }

    #[test]
    fn test_tie_term() {
        // groups of sizes 2, 3 and 1: (8 - 2) + (27 - 3) = 30
        assert_eq!(tie_term(&[1.0, 1.0, 2.0, 2.0, 2.0, 5.0]), 30.0);
        assert_eq!(tie_term(&[1.0, 2.0, 3.0]), 0.0);
        assert!(has_ties(&[4.0, 4.0]));
        assert!(!has_ties(&[]));
    }
}
