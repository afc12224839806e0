//! Window-level label aggregation by majority vote.
//!
//! Per-sample labels are free-form strings; a window gets the binary label
//! 1 exactly when its most frequent (case-folded) label equals the target
//! label. Windows straddling a fall boundary are decided by the tie-break
//! documented on [`aggregate`].

/// Reduce the labels of one window to a binary window label.
///
/// Labels are lowercased before counting, so "Fall", "FALL" and "fall"
/// vote together. Returns 1 if the majority label equals `target_label`
/// (itself compared case-insensitively), else 0.
///
/// Tie-break: among equally frequent labels, the one encountered first in
/// window order wins. This is deterministic and independent of label
/// spelling; a 50/50 window therefore takes the label of its first sample.
pub fn aggregate<'a, I>(labels: I, target_label: &str) -> u8
where
    I: IntoIterator<Item = &'a str>,
{
    let target = target_label.to_lowercase();
    match majority_label(labels) {
        Some(majority) if majority == target => 1,
        _ => 0,
    }
}

/// Most frequent lowercased label, first-encountered wins ties.
/// `None` for an empty window.
fn majority_label<'a, I>(labels: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // Vec keeps first-encounter order; windows hold few distinct labels
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        let folded = label.to_lowercase();
        match counts.iter_mut().find(|(l, _)| *l == folded) {
            Some((_, n)) => *n += 1,
            None => counts.push((folded, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (label, n) in counts {
        match &best {
            Some((_, best_n)) if n <= *best_n => {}
            _ => best = Some((label, n)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanimous_fall_any_case() {
        let labels = ["fall", "FALL", "Fall", "fAlL"];
        assert_eq!(aggregate(labels, "fall"), 1);
    }

    #[test]
    fn test_unanimous_non_fall() {
        let labels = ["walk", "walk", "walk"];
        assert_eq!(aggregate(labels, "fall"), 0);
    }

    #[test]
    fn test_majority_wins() {
        let labels = ["fall", "fall", "fall", "walk", "walk"];
        assert_eq!(aggregate(labels, "fall"), 1);

        let labels = ["fall", "walk", "walk", "walk", "fall"];
        assert_eq!(aggregate(labels, "fall"), 0);
    }

    #[test]
    fn test_even_split_first_label_wins() {
        // Fixed fixture pinning the tie-break: first-encountered wins.
        let labels = ["fall", "walk", "fall", "walk"];
        assert_eq!(aggregate(labels, "fall"), 1);

        let labels = ["walk", "fall", "walk", "fall"];
        assert_eq!(aggregate(labels, "fall"), 0);
    }

    #[test]
    fn test_three_way_tie_is_first_encountered() {
        let labels = ["sit", "fall", "walk"];
        assert_eq!(majority_label(labels).as_deref(), Some("sit"));
    }

    #[test]
    fn test_empty_window_is_not_fall() {
        assert_eq!(aggregate(std::iter::empty::<&str>(), "fall"), 0);
    }
}
