//! Exit code constants for gate binaries

/// Success - candidate is a strict bump over the reference
pub const SUCCESS: u8 = 0;

/// Gate failed - version not bumped, or a version string did not parse
pub const GATE_FAILED: u8 = 1;

/// Input error - a version string could not be obtained at all
pub const INPUT_ERROR: u8 = 2;
