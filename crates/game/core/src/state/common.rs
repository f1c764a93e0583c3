use std::fmt;

use crate::config::GameConfig;
use crate::error::ValidationError;

/// Unique identifier for any actor tracked by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl ActorId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this identity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chessboard distance to another position: diagonal steps count as one.
    ///
    /// Two positions are adjacent for melee purposes when this is exactly 1.
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Discrete point or duration on the turn clock.
///
/// Values are bounded to `[0, TimeValue::MAX]`. All arithmetic saturates at
/// the bounds instead of wrapping or failing: subtraction floors at zero,
/// addition caps at the maximum. Lower values act sooner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeValue(u64);

impl TimeValue {
    pub const ZERO: Self = Self(0);

    /// Upper bound of the clock. See [`GameConfig::TIME_VALUE_CAP`].
    pub const MAX: Self = Self(GameConfig::TIME_VALUE_CAP);

    /// Creates a time value from a signed integer, rejecting negatives.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::NegativeTimeValue { value });
        }
        Ok(Self::from_raw(value as u64))
    }

    /// Creates a time value from a raw tick count, saturating at the cap.
    pub const fn from_raw(value: u64) -> Self {
        if value > GameConfig::TIME_VALUE_CAP {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the raw tick count.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::from_raw(self.0.saturating_add(rhs.0))
    }

    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Add for TimeValue {
    type Output = TimeValue;
    fn add(self, rhs: Self) -> TimeValue {
        self.saturating_add(rhs)
    }
}

impl std::ops::Sub for TimeValue {
    type Output = TimeValue;
    fn sub(self, rhs: Self) -> TimeValue {
        self.saturating_sub(rhs)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer resource meter (e.g., health) tracked per actor.
///
/// `current` never exceeds `maximum` and never drops below zero; a meter at
/// zero means the resource is depleted (for health: the actor is dead).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter starting at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Reduces the meter, flooring at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_time_value_is_rejected() {
        assert!(matches!(
            TimeValue::new(-1),
            Err(ValidationError::NegativeTimeValue { value: -1 })
        ));
        assert_eq!(TimeValue::new(0).unwrap(), TimeValue::ZERO);
        assert_eq!(TimeValue::new(42).unwrap().value(), 42);
    }

    #[test]
    fn time_arithmetic_saturates_at_both_bounds() {
        let small = TimeValue::from_raw(10);
        let big = TimeValue::from_raw(30);

        assert_eq!((small - big), TimeValue::ZERO);
        assert_eq!((big - small).value(), 20);
        assert_eq!(TimeValue::MAX + big, TimeValue::MAX);
        assert_eq!(TimeValue::MAX.saturating_add(TimeValue::MAX), TimeValue::MAX);
    }

    #[test]
    fn raw_construction_saturates_at_cap() {
        assert_eq!(TimeValue::from_raw(u64::MAX), TimeValue::MAX);
        assert_eq!(
            TimeValue::from_raw(GameConfig::TIME_VALUE_CAP),
            TimeValue::MAX
        );
    }

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let center = Position::new(2, 2);
        assert_eq!(center.chebyshev_distance(Position::new(2, 3)), 1);
        assert_eq!(center.chebyshev_distance(Position::new(3, 3)), 1);
        assert_eq!(center.chebyshev_distance(Position::new(1, 1)), 1);
        assert_eq!(center.chebyshev_distance(Position::new(4, 2)), 2);
        assert_eq!(center.chebyshev_distance(center), 0);
    }

    #[test]
    fn resource_meter_clamps() {
        let mut meter = ResourceMeter::new(120, 100);
        assert_eq!(meter.current, 100);

        meter.apply_damage(40);
        assert_eq!(meter.current, 60);

        meter.apply_damage(200);
        assert_eq!(meter.current, 0);
        assert!(meter.is_depleted());
    }
}
