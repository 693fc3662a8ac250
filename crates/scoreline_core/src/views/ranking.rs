use crate::models::{PlayerScore, StandingRow};
use std::cmp::Ordering;
use std::sync::Arc;

/// First `n` records by descending `score`.
///
/// `sort_by` is stable: records with equal scores keep their input order.
pub(crate) fn top_by<T>(records: &[Arc<T>], n: usize, score: impl Fn(&T) -> f64) -> Vec<Arc<T>> {
    let mut ranked: Vec<&Arc<T>> = records.iter().collect();
    ranked.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(n).cloned().collect()
}

pub(crate) fn top_players(records: &[Arc<PlayerScore>], field: &str, n: usize) -> Vec<Arc<PlayerScore>> {
    top_by(records, n, |record| record.stat(field))
}

/// Points table order: points, then score difference, both descending
pub(crate) fn rank_standings(rows: &[StandingRow]) -> Vec<StandingRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(Ordering::Equal)
            .then(b.score_difference.partial_cmp(&a.score_difference).unwrap_or(Ordering::Equal))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[Arc<PlayerScore>]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let records = vec![
            Arc::new(PlayerScore::new("A").with_stat("runs", 10)),
            Arc::new(PlayerScore::new("B").with_stat("runs", 10)),
            Arc::new(PlayerScore::new("C").with_stat("runs", 20)),
        ];
        assert_eq!(names(&top_players(&records, "runs", 5)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_missing_field_ranks_as_zero() {
        let records = vec![
            Arc::new(PlayerScore::new("none")),
            Arc::new(PlayerScore::new("neg").with_stat("goals", -1)),
            Arc::new(PlayerScore::new("one").with_stat("goals", 1)),
        ];
        assert_eq!(names(&top_players(&records, "goals", 5)), vec!["one", "none", "neg"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let records: Vec<_> = (0..8)
            .map(|i| Arc::new(PlayerScore::new(&format!("p{i}")).with_stat("wickets", i)))
            .collect();
        let top = top_players(&records, "wickets", 5);
        assert_eq!(names(&top), vec!["p7", "p6", "p5", "p4", "p3"]);
    }

    #[test]
    fn test_standings_tiebreak_on_difference() {
        let mut a = StandingRow::new(1, 6.0);
        a.score_difference = 1.0;
        let mut b = StandingRow::new(2, 6.0);
        b.score_difference = 4.0;
        let c = StandingRow::new(3, 9.0);

        let ranked = rank_standings(&[a, b, c]);
        let order: Vec<_> = ranked.iter().map(|r| r.team_id.to_string()).collect();
        assert_eq!(order, vec!["3", "2", "1"]);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: output is sorted and equal scores keep input order
            #[test]
            fn prop_top_by_is_stable(scores in proptest::collection::vec(0u8..4, 0..30)) {
                let records: Vec<Arc<(usize, u8)>> =
                    scores.iter().copied().enumerate().map(Arc::new).collect();
                let top = top_by(&records, records.len(), |r| r.1 as f64);

                prop_assert_eq!(top.len(), records.len());
                for pair in top.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(a.1 >= b.1);
                    if a.1 == b.1 {
                        prop_assert!(a.0 < b.0);
                    }
                }
            }

            /// Property: never returns more than n rows
            #[test]
            fn prop_top_by_respects_n(len in 0usize..20, n in 0usize..10) {
                let records: Vec<Arc<usize>> = (0..len).map(Arc::new).collect();
                let top = top_by(&records, n, |r| *r as f64);
                prop_assert_eq!(top.len(), len.min(n));
            }
        }
    }
}
