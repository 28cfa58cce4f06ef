/// Lowest buildable block height (inclusive).
pub const WORLD_MIN_Y: i32 = -64;
/// Highest buildable block height (inclusive).
pub const WORLD_MAX_Y: i32 = 319;

/// Default half-width, in blocks, of an island claim created around a center.
pub const DEFAULT_ISLAND_PROTECTION_RANGE: i32 = 50;
