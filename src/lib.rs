pub mod chain;
pub mod format;

/// Highest exponent a `power_<n>` routine is generated for.
pub const POWER_MAX: u32 = 20;
