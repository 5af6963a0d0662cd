//! Decision envelope for policy outputs.
//!
//! [`LinearBandit::select_arm`][crate::LinearBandit::select_arm] returns a bare
//! index. When a caller wants to log or replay a choice it can use
//! [`LinearBandit::decide`][crate::LinearBandit::decide] instead, which wraps
//! the same choice together with the per-arm scores and typed notes saying why
//! that arm won.

/// Audit-friendly notes attached to a decision.
///
/// Prefer adding new variants over changing existing semantics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionNote {
    /// Argmax over scores, no randomization.
    DeterministicChoice,

    /// Several arms shared the maximum score; the lowest index was kept.
    ///
    /// `tied` lists every arm with the maximum score, in index order.
    TieBrokenByLowestIndex { tied: Vec<usize> },
}

/// A single greedy decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// Selected arm index.
    pub chosen: usize,
    /// Score of every arm for this context, in arm index order.
    pub scores: Vec<f64>,
    /// Notes describing why this choice happened.
    pub notes: Vec<DecisionNote>,
}

impl Decision {
    /// Score of the chosen arm.
    pub fn chosen_score(&self) -> f64 {
        self.scores.get(self.chosen).copied().unwrap_or(f64::NAN)
    }

    /// Whether the choice needed the lowest-index tie-break.
    pub fn was_tie(&self) -> bool {
        self.notes
            .iter()
            .any(|n| matches!(n, DecisionNote::TieBrokenByLowestIndex { .. }))
    }
}

/// Index of the maximum score; the first-seen maximum wins ties.
///
/// A later arm replaces the incumbent only when strictly greater, so equal
/// scores resolve to the lowest index.
pub(crate) fn argmax_first(scores: &[f64]) -> usize {
    let mut best = 0usize;
    let mut best_score = scores.first().copied().unwrap_or(f64::NEG_INFINITY);
    for (i, &sc) in scores.iter().enumerate().skip(1) {
        if sc > best_score {
            best = i;
            best_score = sc;
        }
    }
    best
}

pub(crate) fn decision_from_scores(scores: Vec<f64>) -> Decision {
    let chosen = argmax_first(&scores);
    let best = scores[chosen];
    let tied: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == best)
        .map(|(i, _)| i)
        .collect();

    let mut notes = vec![DecisionNote::DeterministicChoice];
    if tied.len() > 1 {
        notes.push(DecisionNote::TieBrokenByLowestIndex { tied });
    }
    Decision {
        chosen,
        scores,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_keeps_first_of_equal_maxima() {
        assert_eq!(argmax_first(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(argmax_first(&[5.0, 5.0]), 0);
        assert_eq!(argmax_first(&[-1.0, -0.5]), 1);
        assert_eq!(argmax_first(&[0.0]), 0);
    }

    #[test]
    fn decision_records_ties() {
        let d = decision_from_scores(vec![0.2, 0.7, 0.7]);
        assert_eq!(d.chosen, 1);
        assert!(d.was_tie());
        assert_eq!(
            d.notes,
            vec![
                DecisionNote::DeterministicChoice,
                DecisionNote::TieBrokenByLowestIndex { tied: vec![1, 2] },
            ]
        );
        assert_eq!(d.chosen_score(), 0.7);

        let d = decision_from_scores(vec![0.9, 0.1]);
        assert!(!d.was_tie());
        assert_eq!(d.notes, vec![DecisionNote::DeterministicChoice]);
    }
}
