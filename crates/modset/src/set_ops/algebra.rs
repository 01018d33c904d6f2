//! Pure set functions over mod record lists
//!
//! Identity is the record name (exact, case-sensitive). Every function keeps
//! the order of its first argument and never sorts.

use crate::parse_preset::ModRecord;
use std::collections::HashSet;

fn name_set(list: &[ModRecord]) -> HashSet<&str> {
    list.iter().map(|m| m.name.as_str()).collect()
}

/// Collapse duplicate names, keeping the first occurrence of each
pub fn unique_by_name(list: &[ModRecord]) -> Vec<ModRecord> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter()
        .filter(|m| seen.insert(m.name.as_str()))
        .cloned()
        .collect()
}

/// All of `a`, then the records of `b` whose names are not in `a`, deduplicated
pub fn union(a: &[ModRecord], b: &[ModRecord]) -> Vec<ModRecord> {
    let mut seen = HashSet::with_capacity(a.len() + b.len());
    a.iter()
        .chain(b.iter())
        .filter(|m| seen.insert(m.name.as_str()))
        .cloned()
        .collect()
}

/// Records of `a` whose names appear anywhere in `b`
///
/// Duplicates already present in `a` are kept; no dedup pass is applied.
pub fn intersect(a: &[ModRecord], b: &[ModRecord]) -> Vec<ModRecord> {
    let names = name_set(b);
    a.iter()
        .filter(|m| names.contains(m.name.as_str()))
        .cloned()
        .collect()
}

/// Records of `a` whose names do not appear in `b`
pub fn difference(a: &[ModRecord], b: &[ModRecord]) -> Vec<ModRecord> {
    let names = name_set(b);
    a.iter()
        .filter(|m| !names.contains(m.name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(names: &[&str]) -> Vec<ModRecord> {
        names.iter().map(|n| ModRecord::new(*n)).collect()
    }

    fn names(list: &[ModRecord]) -> Vec<&str> {
        list.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_unique_by_name_keeps_first_occurrence() {
        let list = vec![
            ModRecord::new("ACE").with_source("Steam"),
            ModRecord::new("CBA_A3"),
            ModRecord::new("ACE").with_source("Local"),
        ];

        let unique = unique_by_name(&list);
        assert_eq!(names(&unique), vec!["ACE", "CBA_A3"]);
        assert_eq!(unique[0].source, "Steam");
    }

    #[test]
    fn test_unique_by_name_is_idempotent() {
        let list = mods(&["b", "a", "b", "c", "a", "d"]);
        let once = unique_by_name(&list);
        let twice = unique_by_name(&once);

        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        let list = mods(&["ace", "ACE"]);
        assert_eq!(unique_by_name(&list).len(), 2);
        assert!(intersect(&mods(&["ace"]), &mods(&["ACE"])).is_empty());
    }

    #[test]
    fn test_union_order_and_dedup() {
        let a = mods(&["M1", "M2", "M3"]);
        let b = mods(&["M2", "M3", "M4"]);

        assert_eq!(names(&union(&a, &b)), vec!["M1", "M2", "M3", "M4"]);
        assert_eq!(names(&union(&b, &a)), vec!["M2", "M3", "M4", "M1"]);
    }

    #[test]
    fn test_union_is_commutative_as_sets() {
        let a = mods(&["x", "y", "y", "z"]);
        let b = mods(&["w", "z", "x"]);

        let ab: HashSet<_> = union(&a, &b).into_iter().map(|m| m.name).collect();
        let ba: HashSet<_> = union(&b, &a).into_iter().map(|m| m.name).collect();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_union_payload_comes_from_first_operand() {
        let a = vec![ModRecord::new("ACE").with_link("https://a.example")];
        let b = vec![ModRecord::new("ACE").with_link("https://b.example")];

        let result = union(&a, &b);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].link, "https://a.example");
    }

    #[test]
    fn test_intersect_membership() {
        let a = mods(&["M1", "M2", "M3"]);
        let b = mods(&["M2", "M3", "M4"]);

        assert_eq!(names(&intersect(&a, &b)), vec!["M2", "M3"]);
        assert_eq!(names(&intersect(&b, &a)), vec!["M2", "M3"]);
    }

    #[test]
    fn test_intersect_keeps_duplicates_of_first_operand() {
        let a = mods(&["M2", "M1", "M2"]);
        let b = mods(&["M2"]);

        assert_eq!(names(&intersect(&a, &b)), vec!["M2", "M2"]);
    }

    #[test]
    fn test_difference_both_directions() {
        let a = mods(&["M1", "M2", "M3"]);
        let b = mods(&["M2", "M3", "M4"]);

        assert_eq!(names(&difference(&a, &b)), vec!["M1"]);
        assert_eq!(names(&difference(&b, &a)), vec!["M4"]);
    }

    #[test]
    fn test_difference_ignores_payload() {
        let a = vec![ModRecord::new("ACE").with_source("Steam")];
        let b = vec![ModRecord::new("ACE").with_source("Local")];

        assert!(difference(&a, &b).is_empty());
    }

    #[test]
    fn test_empty_operands() {
        let a = mods(&["M1"]);
        let empty: Vec<ModRecord> = Vec::new();

        assert_eq!(names(&union(&empty, &a)), vec!["M1"]);
        assert!(intersect(&a, &empty).is_empty());
        assert_eq!(names(&difference(&a, &empty)), vec!["M1"]);
        assert!(difference(&empty, &a).is_empty());
    }
}
