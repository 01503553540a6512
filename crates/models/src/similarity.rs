use std::{collections::HashSet, hash::Hash};

/// Percentage of shared members between two sets, `|A ∩ B| / |A ∪ B| * 100`.
///
/// Two empty sets share nothing and score 0.
pub fn overlap_percentage<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }

    let overlap = a.intersection(b).count();
    (overlap as f64 / union as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&'static str]) -> HashSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        assert_eq!(overlap_percentage(&set(&["MATH 110"]), &set(&["ENGL 101"])), 0.0);
    }

    #[test]
    fn test_identical_sets_score_hundred() {
        let courses = set(&["MATH 110", "CS& 101"]);
        assert_eq!(overlap_percentage(&courses, &courses.clone()), 100.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = set(&["MATH 110", "CS& 101", "ENGL 101"]);
        let b = set(&["MATH 110", "CS& 101", "HIST 146"]);
        assert_eq!(overlap_percentage(&a, &b), 50.0);
    }

    #[test]
    fn test_empty_sets() {
        assert_eq!(overlap_percentage(&set(&[]), &set(&[])), 0.0);
        assert_eq!(overlap_percentage(&set(&["MATH 110"]), &set(&[])), 0.0);
    }
}
