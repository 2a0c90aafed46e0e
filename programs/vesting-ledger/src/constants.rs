//! Program-wide constants.

/// Share of the pool allocated to a `Role::User` registrant, in percent.
pub const USER_SHARE_PERCENT: u64 = 50;

/// Share of the pool allocated to a `Role::Partner` registrant, in percent.
pub const PARTNER_SHARE_PERCENT: u64 = 25;

/// Share of the pool allocated to a `Role::Team` registrant, in percent.
pub const TEAM_SHARE_PERCENT: u64 = 25;

/// Denominator for the share percentages above.
pub const SHARE_DENOMINATOR: u64 = 100;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;
