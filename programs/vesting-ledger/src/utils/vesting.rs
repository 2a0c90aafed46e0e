//! Pure vesting math: role-based allocation and cliff-then-linear unlock.
//!
//! - nothing unlocks before `registered_at + cliff_seconds`
//! - everything is unlocked at `registered_at + cliff_seconds + duration_seconds`
//! - in between, unlock is linear over the post-cliff window (floor division)

use crate::constants::{
    PARTNER_SHARE_PERCENT, SHARE_DENOMINATOR, TEAM_SHARE_PERCENT, USER_SHARE_PERCENT,
};
use crate::error::LedgerError;
use crate::state::Role;

/// Tokens granted to a new registrant of `role`, as a fixed fraction of the
/// original pool total (floor division).
pub fn allocation_for_role(role: Role, pool_total: u64) -> Result<u64, LedgerError> {
    let percent = match role {
        Role::User => USER_SHARE_PERCENT,
        Role::Partner => PARTNER_SHARE_PERCENT,
        Role::Team => TEAM_SHARE_PERCENT,
    };
    let share = (pool_total as u128)
        .checked_mul(percent as u128)
        .ok_or(LedgerError::MathOverflow)?
        / (SHARE_DENOMINATOR as u128);
    u64::try_from(share).map_err(|_| LedgerError::MathOverflow)
}

/// Portion of `total_allocated` that time has made eligible for transfer at
/// `now`, irrespective of how much has already been released.
///
/// Non-decreasing in `now` and bounded above by `total_allocated`.
pub fn unlocked_amount(
    total_allocated: u64,
    registered_at: i64,
    cliff_seconds: u64,
    duration_seconds: u64,
    now: i64,
) -> Result<u64, LedgerError> {
    if duration_seconds == 0 {
        return Err(LedgerError::InvalidConfig);
    }
    let cliff_end = registered_at
        .checked_add(i64::try_from(cliff_seconds).map_err(|_| LedgerError::MathOverflow)?)
        .ok_or(LedgerError::MathOverflow)?;
    if now < cliff_end {
        return Ok(0);
    }
    let full_unlock = cliff_end
        .checked_add(i64::try_from(duration_seconds).map_err(|_| LedgerError::MathOverflow)?)
        .ok_or(LedgerError::MathOverflow)?;
    if now >= full_unlock {
        return Ok(total_allocated);
    }
    // now is in [cliff_end, full_unlock), so elapsed fits in u64.
    let elapsed = (now - cliff_end) as u64;
    let unlocked = (total_allocated as u128)
        .checked_mul(elapsed as u128)
        .ok_or(LedgerError::MathOverflow)?
        / (duration_seconds as u128);
    u64::try_from(unlocked).map_err(|_| LedgerError::MathOverflow)
}

/// Newly releasable balance at `now`: unlocked minus already released.
pub fn releasable_amount(
    total_allocated: u64,
    released: u64,
    registered_at: i64,
    cliff_seconds: u64,
    duration_seconds: u64,
    now: i64,
) -> Result<u64, LedgerError> {
    let unlocked = unlocked_amount(
        total_allocated,
        registered_at,
        cliff_seconds,
        duration_seconds,
        now,
    )?;
    unlocked
        .checked_sub(released)
        .ok_or(LedgerError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const POOL: u64 = 10_000;
    const CLIFF: u64 = 30 * SECONDS_PER_DAY as u64;
    const DURATION: u64 = 365 * SECONDS_PER_DAY as u64;
    const START: i64 = 1_700_000_000;

    #[test]
    fn user_gets_half_of_pool() {
        assert_eq!(allocation_for_role(Role::User, POOL).unwrap(), 5_000);
    }

    #[test]
    fn partner_and_team_each_get_a_quarter() {
        assert_eq!(allocation_for_role(Role::Partner, POOL).unwrap(), 2_500);
        assert_eq!(allocation_for_role(Role::Team, POOL).unwrap(), 2_500);
    }

    #[test]
    fn full_cohort_exhausts_pool_exactly() {
        let total = allocation_for_role(Role::User, POOL).unwrap()
            + allocation_for_role(Role::Partner, POOL).unwrap()
            + allocation_for_role(Role::Team, POOL).unwrap();
        assert_eq!(total, POOL);
    }

    #[test]
    fn allocation_survives_large_pools() {
        assert_eq!(
            allocation_for_role(Role::User, u64::MAX).unwrap(),
            u64::MAX / 2
        );
    }

    #[test]
    fn nothing_unlocks_before_cliff() {
        let one_day_in = START + SECONDS_PER_DAY;
        assert_eq!(
            unlocked_amount(5_000, START, CLIFF, DURATION, one_day_in).unwrap(),
            0
        );
        // One second before the cliff boundary is still zero.
        let just_before = START + CLIFF as i64 - 1;
        assert_eq!(
            unlocked_amount(5_000, START, CLIFF, DURATION, just_before).unwrap(),
            0
        );
    }

    #[test]
    fn linear_unlock_after_cliff() {
        // 31 days past the cliff: floor(5000 * 31 / 365).
        let now = START + CLIFF as i64 + 31 * SECONDS_PER_DAY;
        let unlocked = unlocked_amount(5_000, START, CLIFF, DURATION, now).unwrap();
        assert_eq!(unlocked, 5_000 * 31 / 365);
        assert!(unlocked > 0);
        assert!(unlocked < 5_000);
    }

    #[test]
    fn fully_unlocked_at_end_of_window() {
        let end = START + CLIFF as i64 + DURATION as i64;
        assert_eq!(unlocked_amount(5_000, START, CLIFF, DURATION, end).unwrap(), 5_000);
        // Stays pinned at the allocation afterwards.
        let much_later = end + 10 * 365 * SECONDS_PER_DAY;
        assert_eq!(
            unlocked_amount(5_000, START, CLIFF, DURATION, much_later).unwrap(),
            5_000
        );
    }

    #[test]
    fn unlocked_is_monotonic_and_bounded() {
        let mut prev = 0u64;
        let end = START + CLIFF as i64 + DURATION as i64;
        let mut t = START;
        while t <= end + SECONDS_PER_DAY {
            let u = unlocked_amount(5_000, START, CLIFF, DURATION, t).unwrap();
            assert!(u >= prev);
            assert!(u <= 5_000);
            prev = u;
            t += SECONDS_PER_DAY;
        }
        assert_eq!(prev, 5_000);
    }

    #[test]
    fn releasable_is_zero_immediately_after_release() {
        let now = START + CLIFF as i64 + 31 * SECONDS_PER_DAY;
        let first = releasable_amount(5_000, 0, START, CLIFF, DURATION, now).unwrap();
        assert!(first > 0);
        // Same timestamp, already released: nothing further.
        let second = releasable_amount(5_000, first, START, CLIFF, DURATION, now).unwrap();
        assert_eq!(second, 0);
    }

    #[test]
    fn releasable_sums_to_allocation() {
        // Release in three steps; the sum must equal the full allocation.
        let t1 = START + CLIFF as i64 + 100 * SECONDS_PER_DAY;
        let t2 = START + CLIFF as i64 + 250 * SECONDS_PER_DAY;
        let t3 = START + CLIFF as i64 + DURATION as i64;

        let mut released = 0u64;
        for t in [t1, t2, t3] {
            released += releasable_amount(5_000, released, START, CLIFF, DURATION, t).unwrap();
        }
        assert_eq!(released, 5_000);
        assert_eq!(
            releasable_amount(5_000, released, START, CLIFF, DURATION, t3).unwrap(),
            0
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(matches!(
            unlocked_amount(5_000, START, CLIFF, 0, START),
            Err(LedgerError::InvalidConfig)
        ));
    }

    #[test]
    fn large_allocation_does_not_overflow() {
        let now = START + CLIFF as i64 + 200 * SECONDS_PER_DAY;
        let unlocked = unlocked_amount(u64::MAX, START, CLIFF, DURATION, now).unwrap();
        let expected = (u64::MAX as u128) * (200 * SECONDS_PER_DAY as u128) / (DURATION as u128);
        assert_eq!(unlocked as u128, expected);
    }
}
