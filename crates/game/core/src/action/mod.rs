//! Combat action descriptors.
//!
//! A [`CombatAction`] describes what an action costs and what it does; it
//! carries no execution logic. Descriptors are validated on construction so
//! that every instance reaching the scheduler or the attack workflow is
//! well-formed by construction.

use crate::error::ValidationError;
use crate::state::TimeValue;

const ACCURACY_BONUS_MIN: i32 = -100;
const ACCURACY_BONUS_MAX: i32 = 100;

/// Broad classification of a combat action.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    /// Offensive action against another actor.
    #[default]
    Attack,
    /// Self- or ally-directed action (guard, parry, brace).
    Defensive,
}

/// Descriptor for a combat action: name, base cost, damage, and accuracy.
///
/// Fields are private; use [`CombatAction::new`] (validated) or
/// [`CombatAction::new_unchecked`] (escape hatch for tests and content
/// pipelines that validate elsewhere).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatAction {
    name: String,
    base_cost: TimeValue,
    base_damage: u32,
    kind: ActionKind,
    accuracy_bonus: i32,
}

impl CombatAction {
    /// Creates a validated action descriptor.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyActionName`] if `name` is empty
    /// - [`ValidationError::AccuracyBonusOutOfRange`] if the bonus is
    ///   outside `[-100, 100]`
    ///
    /// Negative damage is unrepresentable (`u32`).
    pub fn new(
        name: impl Into<String>,
        base_cost: TimeValue,
        base_damage: u32,
        kind: ActionKind,
        accuracy_bonus: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyActionName);
        }
        if !(ACCURACY_BONUS_MIN..=ACCURACY_BONUS_MAX).contains(&accuracy_bonus) {
            return Err(ValidationError::AccuracyBonusOutOfRange {
                value: accuracy_bonus,
            });
        }
        Ok(Self {
            name,
            base_cost,
            base_damage,
            kind,
            accuracy_bonus,
        })
    }

    /// Creates a descriptor without validation.
    ///
    /// Escape hatch for tests and trusted content loaders; everything else
    /// goes through [`CombatAction::new`].
    pub fn new_unchecked(
        name: impl Into<String>,
        base_cost: TimeValue,
        base_damage: u32,
        kind: ActionKind,
        accuracy_bonus: i32,
    ) -> Self {
        Self {
            name: name.into(),
            base_cost,
            base_damage,
            kind,
            accuracy_bonus,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_cost(&self) -> TimeValue {
        self.base_cost
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn accuracy_bonus(&self) -> i32 {
        self.accuracy_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_descriptor_is_constructable() {
        let action = CombatAction::new(
            "sword_slash",
            TimeValue::from_raw(100),
            15,
            ActionKind::Attack,
            5,
        )
        .unwrap();

        assert_eq!(action.name(), "sword_slash");
        assert_eq!(action.base_damage(), 15);
        assert_eq!(action.kind(), ActionKind::Attack);
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = CombatAction::new("", TimeValue::ZERO, 0, ActionKind::Defensive, 0);
        assert_eq!(result, Err(ValidationError::EmptyActionName));
    }

    #[test]
    fn accuracy_bonus_is_bounded() {
        for bonus in [-101, 101, i32::MIN, i32::MAX] {
            let result =
                CombatAction::new("jab", TimeValue::ZERO, 1, ActionKind::Attack, bonus);
            assert_eq!(
                result,
                Err(ValidationError::AccuracyBonusOutOfRange { value: bonus })
            );
        }
        assert!(CombatAction::new("jab", TimeValue::ZERO, 1, ActionKind::Attack, -100).is_ok());
        assert!(CombatAction::new("jab", TimeValue::ZERO, 1, ActionKind::Attack, 100).is_ok());
    }

    #[test]
    fn unchecked_constructor_skips_validation() {
        let action =
            CombatAction::new_unchecked("", TimeValue::ZERO, 0, ActionKind::Attack, 999);
        assert_eq!(action.name(), "");
        assert_eq!(action.accuracy_bonus(), 999);
    }

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(ActionKind::Attack.to_string(), "attack");
        assert_eq!("defensive".parse::<ActionKind>(), Ok(ActionKind::Defensive));
    }
}
