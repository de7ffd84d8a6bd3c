//! Rule configuration for the automaton.
//!
//! A [`RuleSet`] is always complete. Users describe what they want to change
//! with a [`RuleOverride`], which is merged onto the defaults field by field.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::Result;

/// Thresholds and flags driving one generation's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Count diagonal cells as neighbors
    pub adjacent: bool,
    /// A live cell with more live neighbors than this dies
    pub overcrowded_amount: u32,
    /// Upper bound of the survival band, and the exact count that gives birth
    pub favorable_amount: u32,
    /// A live cell with fewer live neighbors than this dies
    pub lonely_amount: u32,
    /// Dying cells become empty right away instead of dead
    pub instant_death: bool,
    /// Neighbors past an edge are taken from the opposite edge
    pub wrapping_field: bool,
    /// Generations a dead cell stays dead before becoming empty
    pub turns_decompose: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            adjacent: true,
            overcrowded_amount: 3,
            favorable_amount: 3,
            lonely_amount: 2,
            instant_death: true,
            wrapping_field: true,
            turns_decompose: 0,
        }
    }
}

impl RuleSet {
    /// Classic Conway rules (B3/S23) on a torus
    pub fn conway() -> Self {
        Self::default()
    }

    /// Overwrites every field the override carries.
    pub fn merge(self, over: &RuleOverride) -> Self {
        Self {
            adjacent: over.adjacent.unwrap_or(self.adjacent),
            overcrowded_amount: over.overcrowded_amount.unwrap_or(self.overcrowded_amount),
            favorable_amount: over.favorable_amount.unwrap_or(self.favorable_amount),
            lonely_amount: over.lonely_amount.unwrap_or(self.lonely_amount),
            instant_death: over.instant_death.unwrap_or(self.instant_death),
            wrapping_field: over.wrapping_field.unwrap_or(self.wrapping_field),
            turns_decompose: over.turns_decompose.unwrap_or(self.turns_decompose),
        }
    }

    /// The defaults with every override applied in order.
    pub fn merged<'a>(overrides: impl IntoIterator<Item = &'a RuleOverride>) -> Self {
        overrides
            .into_iter()
            .fold(Self::default(), |rules, over| rules.merge(over))
    }
}

/// A partial [`RuleSet`]; absent fields keep whatever they are merged onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverride {
    pub adjacent: Option<bool>,
    pub overcrowded_amount: Option<u32>,
    pub favorable_amount: Option<u32>,
    pub lonely_amount: Option<u32>,
    pub instant_death: Option<bool>,
    pub wrapping_field: Option<bool>,
    pub turns_decompose: Option<u32>,
}

impl From<RuleSet> for RuleOverride {
    fn from(rules: RuleSet) -> Self {
        Self {
            adjacent: Some(rules.adjacent),
            overcrowded_amount: Some(rules.overcrowded_amount),
            favorable_amount: Some(rules.favorable_amount),
            lonely_amount: Some(rules.lonely_amount),
            instant_death: Some(rules.instant_death),
            wrapping_field: Some(rules.wrapping_field),
            turns_decompose: Some(rules.turns_decompose),
        }
    }
}

impl RuleOverride {
    /// Dying cells linger as dead for `turns` generations.
    pub fn decomposing(turns: u32) -> Self {
        Self {
            instant_death: Some(false),
            turns_decompose: Some(turns),
            ..Self::default()
        }
    }

    /// Stacks `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: &RuleOverride) -> Self {
        Self {
            adjacent: other.adjacent.or(self.adjacent),
            overcrowded_amount: other.overcrowded_amount.or(self.overcrowded_amount),
            favorable_amount: other.favorable_amount.or(self.favorable_amount),
            lonely_amount: other.lonely_amount.or(self.lonely_amount),
            instant_death: other.instant_death.or(self.instant_death),
            wrapping_field: other.wrapping_field.or(self.wrapping_field),
            turns_decompose: other.turns_decompose.or(self.turns_decompose),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_override_gives_defaults() {
        let rules = RuleSet::merged([&RuleOverride::default()]);
        assert_eq!(rules, RuleSet::default());
        assert!(rules.adjacent);
        assert_eq!(rules.overcrowded_amount, 3);
        assert_eq!(rules.favorable_amount, 3);
        assert_eq!(rules.lonely_amount, 2);
        assert!(rules.instant_death);
        assert!(rules.wrapping_field);
        assert_eq!(rules.turns_decompose, 0);
    }

    #[test]
    fn override_replaces_only_present_fields() {
        let over = RuleOverride {
            adjacent: Some(false),
            lonely_amount: Some(2),
            ..RuleOverride::default()
        };
        let rules = RuleSet::default().merge(&over);
        assert_eq!(
            rules,
            RuleSet {
                adjacent: false,
                ..RuleSet::default()
            }
        );
    }

    #[test]
    fn later_overrides_win() {
        let first = RuleOverride {
            favorable_amount: Some(4),
            wrapping_field: Some(false),
            ..RuleOverride::default()
        };
        let second = RuleOverride {
            favorable_amount: Some(5),
            ..RuleOverride::default()
        };
        let rules = RuleSet::merged([&first, &second]);
        assert_eq!(rules.favorable_amount, 5);
        assert!(!rules.wrapping_field);

        let stacked = first.merge(&second);
        assert_eq!(RuleSet::default().merge(&stacked), rules);
    }

    #[test]
    fn full_override_round_trips() {
        let custom = RuleSet {
            adjacent: false,
            overcrowded_amount: 7,
            favorable_amount: 1,
            lonely_amount: 9,
            instant_death: false,
            wrapping_field: false,
            turns_decompose: 4,
        };
        assert_eq!(RuleSet::default().merge(&custom.into()), custom);
    }

    #[test]
    fn decomposing_preset() {
        let rules = RuleSet::default().merge(&RuleOverride::decomposing(3));
        assert!(!rules.instant_death);
        assert_eq!(rules.turns_decompose, 3);
        assert_eq!(rules.favorable_amount, 3);
    }

    #[test]
    fn parses_toml() {
        let over = RuleOverride::from_toml(
            "adjacent = false\nturns_decompose = 2\ninstant_death = false\n",
        )
        .unwrap();
        assert_eq!(over.adjacent, Some(false));
        assert_eq!(over.turns_decompose, Some(2));
        assert_eq!(over.instant_death, Some(false));
        assert_eq!(over.lonely_amount, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = RuleOverride::from_toml("random = true\n");
        assert!(matches!(result, Err(Error::RulesFormat(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = RuleOverride::load("/nonexistent/cellrs/rules.toml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
