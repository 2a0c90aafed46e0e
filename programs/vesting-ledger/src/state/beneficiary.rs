use anchor_lang::prelude::*;

/// Cohort of a registrant; fixes the share of the pool granted at
/// registration time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Partner,
    Team,
}

/// Per-address vesting record PDA, created exactly once by a successful
/// registration and never deleted. Schedule fields are written only at
/// creation; `released` only grows.
#[account]
pub struct Beneficiary {
    /// Wallet entitled to this allocation.
    pub wallet: Pubkey,
    /// Cohort chosen at registration.
    pub role: Role,
    /// Tokens granted, fixed at registration.
    pub total_allocated: u64,
    /// Tokens already transferred out; monotonically non-decreasing.
    pub released: u64,
    /// Seconds after registration before anything unlocks.
    pub cliff_seconds: u64,
    /// Length of the post-cliff linear unlock window, in seconds.
    pub duration_seconds: u64,
    /// Unix timestamp of registration (start of the vesting clock).
    pub registered_at: i64,
}

impl Beneficiary {
    pub const SIZE: usize =
        32 + // wallet
        1 +  // role
        8 +  // total_allocated
        8 +  // released
        8 +  // cliff_seconds
        8 +  // duration_seconds
        8;   // registered_at
}
