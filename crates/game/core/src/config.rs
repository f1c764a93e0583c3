/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== time =====
    /// Upper bound of [`TimeValue`](crate::state::TimeValue); arithmetic
    /// saturates here instead of wrapping. The exact value is a balance
    /// knob: large enough that realistic sessions never reach it, small
    /// enough that cost-formula intermediates stay far from `u64` overflow.
    pub const TIME_VALUE_CAP: u64 = 1_000_000_000;

    // ===== actor stat bounds =====
    pub const AGILITY_MIN: i32 = 1;
    pub const AGILITY_MAX: i32 = 100;
    pub const ENCUMBRANCE_MIN: i32 = 0;
    pub const ENCUMBRANCE_MAX: i32 = 50;

    // ===== scheduling =====
    /// Capacity hint for the turn queue: player plus up to 128 enemies.
    pub const MAX_SCHEDULED_ACTORS: usize = 129;
}
