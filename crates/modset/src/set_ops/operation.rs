//! Selectable set operations and their arity rules

use crate::error::{PresetError, Result};
use crate::parse_preset::ModRecord;
use crate::set_ops::algebra::{difference, intersect, union, unique_by_name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// An operation a caller can run over the selected presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetOperation {
    /// Every mod from any selected preset, first occurrence wins
    Union,
    /// Mods present in every selected preset, left-folded pairwise
    Intersection,
    /// Mods of the first selection that are missing from the second
    ///
    /// Only the first two operands participate. Further operands are
    /// ignored rather than folded in.
    Difference,
}

impl SetOperation {
    pub const ALL: [SetOperation; 3] = [
        SetOperation::Union,
        SetOperation::Intersection,
        SetOperation::Difference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetOperation::Union => "union",
            SetOperation::Intersection => "intersection",
            SetOperation::Difference => "difference",
        }
    }

    /// Minimum number of selected presets this operation accepts
    pub fn min_operands(&self) -> usize {
        match self {
            SetOperation::Union => 1,
            SetOperation::Intersection | SetOperation::Difference => 2,
        }
    }

    /// Check operand count: an empty selection first, then the minimum
    pub fn check_arity(&self, selected: usize) -> Result<()> {
        if selected == 0 {
            return Err(PresetError::EmptySelection);
        }
        if selected < self.min_operands() {
            return Err(PresetError::NotEnoughPresets {
                operation: self.to_string(),
                required: self.min_operands(),
                selected,
            });
        }
        Ok(())
    }

    /// Apply the operation to operand lists in selection order
    pub fn apply(&self, operands: &[&[ModRecord]]) -> Result<Vec<ModRecord>> {
        self.check_arity(operands.len())?;

        let result = match self {
            SetOperation::Union => operands[1..]
                .iter()
                .fold(unique_by_name(operands[0]), |acc, next| union(&acc, next)),
            SetOperation::Intersection => operands[1..]
                .iter()
                .fold(operands[0].to_vec(), |acc, next| intersect(&acc, next)),
            SetOperation::Difference => {
                if operands.len() > 2 {
                    warn!(
                        "difference uses only the first two presets; ignoring {} more",
                        operands.len() - 2
                    );
                }
                difference(operands[0], operands[1])
            }
        };

        debug!(
            "{} over {} presets produced {} mods",
            self,
            operands.len(),
            result.len()
        );
        Ok(result)
    }
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetOperation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(SetOperation::Union),
            "intersection" | "intersect" => Ok(SetOperation::Intersection),
            "difference" | "diff" => Ok(SetOperation::Difference),
            other => Err(format!(
                "unknown operation '{}' (expected union, intersection or difference)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(names: &[&str]) -> Vec<ModRecord> {
        names.iter().map(|n| ModRecord::new(*n)).collect()
    }

    fn names(list: &[ModRecord]) -> Vec<String> {
        list.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_parse_operation_names() {
        assert_eq!("union".parse::<SetOperation>(), Ok(SetOperation::Union));
        assert_eq!("Intersection".parse::<SetOperation>(), Ok(SetOperation::Intersection));
        assert_eq!("diff".parse::<SetOperation>(), Ok(SetOperation::Difference));
        assert!("xor".parse::<SetOperation>().is_err());

        for op in SetOperation::ALL {
            assert_eq!(op.to_string().parse::<SetOperation>(), Ok(op));
        }
    }

    #[test]
    fn test_union_across_three_presets() {
        let a = mods(&["M1", "M2"]);
        let b = mods(&["M2", "M3"]);
        let c = mods(&["M4", "M1"]);

        let result = SetOperation::Union.apply(&[&a, &b, &c]).unwrap();
        assert_eq!(names(&result), vec!["M1", "M2", "M3", "M4"]);
    }

    #[test]
    fn test_union_single_preset_dedups() {
        let a = mods(&["M1", "M1", "M2"]);
        let result = SetOperation::Union.apply(&[&a]).unwrap();
        assert_eq!(names(&result), vec!["M1", "M2"]);
    }

    #[test]
    fn test_intersection_left_folds() {
        let a = mods(&["M1", "M2", "M3", "M4"]);
        let b = mods(&["M4", "M2", "M3"]);
        let c = mods(&["M3", "M4"]);

        let result = SetOperation::Intersection.apply(&[&a, &b, &c]).unwrap();
        assert_eq!(names(&result), vec!["M3", "M4"]);
    }

    #[test]
    fn test_difference_ignores_extra_operands() {
        let a = mods(&["M1", "M2", "M3"]);
        let b = mods(&["M2"]);
        let c = mods(&["M1", "M3"]);

        let result = SetOperation::Difference.apply(&[&a, &b, &c]).unwrap();
        assert_eq!(names(&result), vec!["M1", "M3"]);
    }

    #[test]
    fn test_arity_errors() {
        let a = mods(&["M1"]);

        assert!(matches!(
            SetOperation::Union.apply(&[]),
            Err(PresetError::EmptySelection)
        ));
        assert!(matches!(
            SetOperation::Difference.apply(&[]),
            Err(PresetError::EmptySelection)
        ));

        match SetOperation::Intersection.apply(&[&a]) {
            Err(PresetError::NotEnoughPresets { operation, required, selected }) => {
                assert_eq!(operation, "intersection");
                assert_eq!(required, 2);
                assert_eq!(selected, 1);
            }
            other => panic!("Expected NotEnoughPresets, got: {:?}", other),
        }

        assert!(matches!(
            SetOperation::Difference.apply(&[&a]),
            Err(PresetError::NotEnoughPresets { .. })
        ));
    }

    #[test]
    fn test_union_matches_concatenated_dedup() {
        let a = mods(&["M1", "M2", "M1"]);
        let b = mods(&["M3", "M2"]);
        let c = mods(&["M4"]);

        let concatenated: Vec<ModRecord> = [a.clone(), b.clone(), c.clone()].concat();
        let result = SetOperation::Union.apply(&[&a, &b, &c]).unwrap();
        assert_eq!(result, unique_by_name(&concatenated));
    }
}
