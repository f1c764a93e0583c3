//! Action timing: the integer-only cost calculator.
//!
//! Cost determines how far into the timeline an actor re-enters the schedule
//! after acting. The formula is computed entirely in integer arithmetic with
//! explicit half-up rounding so the result is bit-identical on every
//! platform and compiler; this function replaced a floating-point variant
//! whose rounding drifted between targets.
//!
//! Formula:
//! - `cost = round_half_up(base_cost × 100 × (10 + encumbrance) / (agility × 10))`
//!
//! Holding other inputs fixed, raising agility never raises the cost and
//! raising encumbrance never lowers it.

use crate::action::CombatAction;
use crate::config::GameConfig;
use crate::error::ValidationError;
use crate::state::TimeValue;

const COST_SCALE: u64 = 100;
const ENCUMBRANCE_BASE: u64 = 10;
const AGILITY_SCALE: u64 = 10;

/// Calculates the time an action consumes for an actor with the given stats.
///
/// # Errors
///
/// - [`ValidationError::AgilityOutOfRange`] if `agility ∉ [1, 100]`
/// - [`ValidationError::EncumbranceOutOfRange`] if `encumbrance ∉ [0, 50]`
///
/// # Examples
///
/// - base 100, agility 100, encumbrance 0: `100 × 100 × 10 / 1000 = 100`
/// - base 100, agility 10, encumbrance 0: `100 × 100 × 10 / 100 = 1000`
/// - base 100, agility 50, encumbrance 10: `100 × 100 × 20 / 500 = 400`
pub fn calculate_action_time(
    action: &CombatAction,
    agility: i32,
    encumbrance: i32,
) -> Result<TimeValue, ValidationError> {
    if !(GameConfig::AGILITY_MIN..=GameConfig::AGILITY_MAX).contains(&agility) {
        return Err(ValidationError::AgilityOutOfRange { value: agility });
    }
    if !(GameConfig::ENCUMBRANCE_MIN..=GameConfig::ENCUMBRANCE_MAX).contains(&encumbrance) {
        return Err(ValidationError::EncumbranceOutOfRange { value: encumbrance });
    }

    // Half-up rounding via integer numerator/denominator only. base_cost is
    // capped at TIME_VALUE_CAP, so the numerator stays far below u64::MAX.
    let numerator =
        action.base_cost().value() * COST_SCALE * (ENCUMBRANCE_BASE + encumbrance as u64);
    let denominator = agility as u64 * AGILITY_SCALE;
    let cost = (numerator + denominator / 2) / denominator;

    Ok(TimeValue::from_raw(cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;

    fn action_with_cost(base_cost: u64) -> CombatAction {
        CombatAction::new(
            "strike",
            TimeValue::from_raw(base_cost),
            10,
            ActionKind::Attack,
            0,
        )
        .unwrap()
    }

    #[test]
    fn known_costs() {
        let action = action_with_cost(100);

        assert_eq!(calculate_action_time(&action, 100, 0).unwrap().value(), 100);
        assert_eq!(calculate_action_time(&action, 10, 0).unwrap().value(), 1000);
        assert_eq!(calculate_action_time(&action, 50, 10).unwrap().value(), 400);
    }

    #[test]
    fn rounds_half_up_on_exact_ties() {
        // 1 × 100 × 10 / 80 = 12.5, which must round to 13, never 12.
        let action = action_with_cost(1);
        assert_eq!(calculate_action_time(&action, 8, 0).unwrap().value(), 13);
    }

    #[test]
    fn rejects_out_of_range_stats() {
        let action = action_with_cost(100);

        for agility in [0, -1, 101] {
            assert_eq!(
                calculate_action_time(&action, agility, 0),
                Err(ValidationError::AgilityOutOfRange { value: agility })
            );
        }
        for encumbrance in [-1, 51] {
            assert_eq!(
                calculate_action_time(&action, 50, encumbrance),
                Err(ValidationError::EncumbranceOutOfRange { value: encumbrance })
            );
        }
    }

    #[test]
    fn repeated_calls_return_identical_values() {
        let action = action_with_cost(137);
        let samples = [(1, 0), (1, 50), (37, 13), (100, 0), (100, 50)];

        for &(agility, encumbrance) in &samples {
            let first = calculate_action_time(&action, agility, encumbrance).unwrap();
            for _ in 0..1000 {
                assert_eq!(
                    calculate_action_time(&action, agility, encumbrance).unwrap(),
                    first
                );
            }
        }
    }

    #[test]
    fn cost_never_increases_with_agility() {
        let action = action_with_cost(100);

        for encumbrance in [0, 10, 50] {
            let mut previous = calculate_action_time(&action, 1, encumbrance).unwrap();
            for agility in 2..=100 {
                let cost = calculate_action_time(&action, agility, encumbrance).unwrap();
                assert!(
                    cost <= previous,
                    "agility {agility} (encumbrance {encumbrance}): {cost} > {previous}"
                );
                previous = cost;
            }
        }
    }

    #[test]
    fn cost_never_decreases_with_encumbrance() {
        let action = action_with_cost(100);

        for agility in [1, 37, 100] {
            let mut previous = calculate_action_time(&action, agility, 0).unwrap();
            for encumbrance in 1..=50 {
                let cost = calculate_action_time(&action, agility, encumbrance).unwrap();
                assert!(
                    cost >= previous,
                    "encumbrance {encumbrance} (agility {agility}): {cost} < {previous}"
                );
                previous = cost;
            }
        }
    }

    #[test]
    fn zero_base_cost_is_free() {
        let action = action_with_cost(0);
        assert_eq!(calculate_action_time(&action, 1, 50).unwrap(), TimeValue::ZERO);
    }
}
