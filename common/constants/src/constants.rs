#![no_std]

/// Interest rates are integers scaled by this factor, 1_000_000_000 is 100%.
pub const RATE_FACTOR: u64 = 1_000_000_000;
pub const RATE_PRECISION: usize = 9;

/// Collectible amounts are rounded half-up to a multiple of this value.
pub const ACCURACY_FACTOR: u64 = 10_000;

pub const PERIOD_IN_SECONDS: u64 = 86_400;

/// Shifts period boundaries from midnight to 03:00 UTC.
pub const NEGATIVE_TIME_OFFSET: u64 = 10_800;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Repayment amount meaning "whatever is outstanding right now".
pub const REPAY_MAX_AMOUNT: u64 = u64::MAX;

pub const INSTALLMENT_COUNT_MAX: usize = 32;
